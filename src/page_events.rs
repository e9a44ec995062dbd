//! Page-level Event Bindings
//!
//! Window listeners that feed the store: scroll position (throttled),
//! viewport resize (debounced) and the Escape key.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::features::{FeatureError, FeatureResult};
use crate::store::{store_close_overlays, AppStore, AppStateStoreFields};
use crate::timing::{throttle, Debouncer};

/// Scroll distance after which the header switches to its compact style
const HEADER_SCROLL_THRESHOLD: f64 = 100.0;
/// Scroll distance after which the back-to-top button appears
const BACK_TO_TOP_THRESHOLD: f64 = 500.0;

/// Header and back-to-top flags for a scroll position
pub fn scroll_flags(scroll_y: f64) -> (bool, bool) {
    (scroll_y > HEADER_SCROLL_THRESHOLD, scroll_y > BACK_TO_TOP_THRESHOLD)
}

fn window() -> Result<web_sys::Window, FeatureError> {
    web_sys::window().ok_or(FeatureError::Unavailable("window"))
}

fn set_if_changed(signal_value: bool, current: bool, apply: impl FnOnce(bool)) {
    if signal_value != current {
        apply(signal_value);
    }
}

/// Bind the throttled scroll handler
pub fn bind_scroll_effects(store: AppStore, interval_ms: u32) -> FeatureResult {
    let win = window()?;
    let handler_win = win.clone();
    let on_scroll = throttle(interval_ms, move || {
        let y = handler_win.scroll_y().unwrap_or(0.0);
        let (scrolled, back_to_top) = scroll_flags(y);
        set_if_changed(scrolled, store.header_scrolled().get_untracked(), |v| store.header_scrolled().set(v));
        set_if_changed(back_to_top, store.show_back_to_top().get_untracked(), |v| store.show_back_to_top().set(v));
    });
    // Apply the initial position (page reloads keep the scroll offset)
    on_scroll();

    let closure = Closure::<dyn FnMut()>::new(on_scroll);
    win.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Close the mobile nav once the viewport grows past the breakpoint
pub fn bind_resize(store: AppStore, breakpoint_px: f64, debounce_ms: u32) -> FeatureResult {
    let win = window()?;
    let handler_win = win.clone();
    let debouncer = Debouncer::new(debounce_ms);
    let closure = Closure::<dyn FnMut()>::new(move || {
        let win = handler_win.clone();
        debouncer.call(move || {
            let width = win.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0);
            if width > breakpoint_px && store.nav_open().get_untracked() {
                store.nav_open().set(false);
            }
        });
    });
    win.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Escape closes the nav, the cart panel and the item modal
pub fn bind_escape(store: AppStore) -> FeatureResult {
    let document = window()?.document().ok_or(FeatureError::Unavailable("document"))?;
    let closure = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            store_close_overlays(&store);
        }
    });
    document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
