//! Location Fragment
//!
//! Deep links into a pre-filtered menu (`/#tea`). Writes use
//! `history.replaceState` so no navigation or jump happens.

use wasm_bindgen::JsValue;

use crate::features::FeatureError;

/// Current fragment including the leading `#`, or empty
pub fn current_fragment() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Set the fragment, or clear it when `fragment` is `None`
pub fn replace_fragment(fragment: Option<&str>) -> Result<(), FeatureError> {
    let window = web_sys::window().ok_or(FeatureError::Unavailable("window"))?;
    let location = window.location();
    let base = format!("{}{}", location.pathname()?, location.search()?);
    let url = match fragment {
        Some(f) => format!("{}#{}", base, f),
        None => base,
    };
    window
        .history()?
        .replace_state_with_url(&JsValue::NULL, "", Some(&url))?;
    Ok(())
}
