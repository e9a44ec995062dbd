//! Feature Groups
//!
//! Page behaviors (navigation, smooth scroll, reveal animations, ...) start
//! independently. A group that fails is logged and skipped; the rest still
//! start.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum FeatureError {
    #[error("element not found: {0}")]
    MissingElement(String),
    #[error("browser API unavailable: {0}")]
    Unavailable(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for FeatureError {
    fn from(value: JsValue) -> Self {
        FeatureError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type FeatureResult = Result<(), FeatureError>;

/// A named initializer
pub struct FeatureGroup<'a> {
    pub name: &'static str,
    pub init: Box<dyn FnOnce() -> FeatureResult + 'a>,
}

impl<'a> FeatureGroup<'a> {
    pub fn new(name: &'static str, init: impl FnOnce() -> FeatureResult + 'a) -> Self {
        Self { name, init: Box::new(init) }
    }
}

/// Which groups started and which failed
#[derive(Debug, Default)]
pub struct InitReport {
    pub started: Vec<&'static str>,
    pub failed: Vec<(&'static str, String)>,
}

/// Run every group; failures never stop the remaining ones
pub fn init_groups(groups: Vec<FeatureGroup<'_>>) -> InitReport {
    let mut report = InitReport::default();
    for group in groups {
        match (group.init)() {
            Ok(()) => {
                log::debug!("[INIT] {} ready", group.name);
                report.started.push(group.name);
            }
            Err(e) => {
                log::error!("[INIT] {} failed: {}", group.name, e);
                report.failed.push((group.name, e.to_string()));
            }
        }
    }
    log::info!("[INIT] {} feature groups started, {} failed", report.started.len(), report.failed.len());
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_failure_does_not_block_other_groups() {
        let ran_last = Cell::new(false);
        let report = init_groups(vec![
            FeatureGroup::new("nav", || Ok(())),
            FeatureGroup::new("reveal", || Err(FeatureError::Unavailable("IntersectionObserver"))),
            FeatureGroup::new("scroll", || {
                ran_last.set(true);
                Ok(())
            }),
        ]);

        assert!(ran_last.get());
        assert_eq!(report.started, vec!["nav", "scroll"]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, "reveal");
        assert!(report.failed[0].1.contains("IntersectionObserver"));
    }

    #[test]
    fn test_empty_groups() {
        let report = init_groups(Vec::new());
        assert!(report.started.is_empty());
        assert!(report.failed.is_empty());
    }
}
