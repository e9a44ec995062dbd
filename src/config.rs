//! Site Configuration
//!
//! Defaults can be overridden by a `window.SITE_CONFIG` object defined in
//! the page before the WASM bundle loads.

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// localStorage key holding the cart
    pub storage_key: String,
    /// Where the contact form is posted
    pub contact_endpoint: String,
    pub search_debounce_ms: u32,
    pub resize_debounce_ms: u32,
    pub scroll_throttle_ms: u32,
    pub toast_duration_ms: u32,
    /// Height of the fixed header, subtracted when scrolling to a section
    pub header_offset_px: f64,
    /// Viewport width above which the mobile nav is closed
    pub mobile_breakpoint_px: f64,
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: "coffeeCart".to_string(),
            contact_endpoint: "/api/contact".to_string(),
            search_debounce_ms: 300,
            resize_debounce_ms: 250,
            scroll_throttle_ms: 100,
            toast_duration_ms: 4000,
            header_offset_px: 80.0,
            mobile_breakpoint_px: 768.0,
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    /// Read `window.SITE_CONFIG`, falling back to defaults.
    ///
    /// Returns the config plus a note describing why defaults were used, so
    /// the caller can log it once the logger is up.
    pub fn load() -> (Self, Option<String>) {
        let Some(window) = web_sys::window() else {
            return (Self::default(), Some("no window".to_string()));
        };
        let raw = js_sys::Reflect::get(&window, &JsValue::from_str("SITE_CONFIG")).unwrap_or(JsValue::UNDEFINED);
        if raw.is_undefined() || raw.is_null() {
            return (Self::default(), None);
        }
        match serde_wasm_bindgen::from_value(raw) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(format!("invalid SITE_CONFIG: {}", e))),
        }
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
