//! Console Logger
//!
//! A `log` backend for browser apps. Formatted lines go to the devtools
//! console (stderr off-wasm) and the most recent ones are kept in a
//! circular buffer so the page can show or export them.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Local};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of lines kept in memory
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Console logger with a bounded line history
pub struct ConsoleLogger {
    level: LevelFilter,
    capacity: usize,
    history: Mutex<VecDeque<String>>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity,
            history: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Lines currently held in the history, oldest first
    pub fn recent_lines(&self) -> Vec<String> {
        match self.history.lock() {
            Ok(history) => history.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    fn remember(&self, line: String) {
        if self.capacity == 0 {
            return;
        }
        let Ok(mut history) = self.history.lock() else {
            return;
        };
        while history.len() >= self.capacity {
            history.pop_front();
        }
        history.push_back(line);
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(
            record.level(),
            record.target(),
            &record.args().to_string(),
            Local::now(),
        );
        emit(record.level(), &line);
        self.remember(line);
    }

    fn flush(&self) {}
}

/// Format one log line: `[HH:MM:SS.mmm] LEVEL target: message`
pub fn format_line(level: Level, target: &str, message: &str, at: DateTime<Local>) -> String {
    format!("[{}] {:<5} {}: {}", at.format("%H:%M:%S%.3f"), level, target, message)
}

/// Install the global logger. Fails if a logger was already set.
pub fn init(level: LevelFilter, capacity: usize) -> Result<&'static ConsoleLogger, SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}

/// History of the installed global logger (empty before `init`)
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(ConsoleLogger::recent_lines).unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record_at<'a>(level: Level, args: std::fmt::Arguments<'a>) -> Record<'a> {
        Record::builder().level(level).target("test").args(args).build()
    }

    #[test]
    fn test_format_line() {
        let at = Local.with_ymd_and_hms(2024, 3, 1, 9, 5, 7).unwrap();
        let line = format_line(Level::Warn, "cart", "storage unavailable", at);
        assert_eq!(line, "[09:05:07.000] WARN  cart: storage unavailable");
    }

    #[test]
    fn test_history_is_bounded() {
        let logger = ConsoleLogger::new(LevelFilter::Trace, 3);
        for i in 0..5 {
            logger.log(&record_at(Level::Info, format_args!("line {}", i)));
        }

        let lines = logger.recent_lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("line 2"));
        assert!(lines[2].ends_with("line 4"));
    }

    #[test]
    fn test_level_filter() {
        let logger = ConsoleLogger::new(LevelFilter::Warn, 10);
        logger.log(&record_at(Level::Debug, format_args!("hidden")));
        logger.log(&record_at(Level::Error, format_args!("shown")));

        let lines = logger.recent_lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("ERROR"));
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let logger = ConsoleLogger::new(LevelFilter::Info, 0);
        logger.log(&record_at(Level::Info, format_args!("dropped")));
        assert!(logger.recent_lines().is_empty());
    }

    #[test]
    fn test_global_history_after_init() {
        let logger = init(LevelFilter::Info, 4).expect("first init");
        log::info!(target: "contact", "submission failed");
        log::debug!(target: "contact", "below level");

        let lines = recent_lines();
        assert_eq!(lines, logger.recent_lines());
        assert!(lines.last().is_some_and(|l| l.ends_with("contact: submission failed")));
        assert!(init(LevelFilter::Info, 4).is_err());
    }
}
