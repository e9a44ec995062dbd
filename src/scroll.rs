//! Scrolling
//!
//! Smooth scrolling to page sections and scroll-triggered reveal
//! animations for elements marked with the `reveal` class.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::features::{FeatureError, FeatureResult};

/// Elements faded in when they enter the viewport
pub const REVEAL_SELECTOR: &str = ".reveal";
/// Class added once an element has been revealed
pub const REVEALED_CLASS: &str = "visible";

fn window() -> Result<web_sys::Window, FeatureError> {
    web_sys::window().ok_or(FeatureError::Unavailable("window"))
}

fn document() -> Result<web_sys::Document, FeatureError> {
    window()?.document().ok_or(FeatureError::Unavailable("document"))
}

/// Target scroll position for a section below a fixed header
pub fn section_scroll_top(element_top: f64, current_scroll: f64, header_offset: f64) -> f64 {
    (element_top + current_scroll - header_offset).max(0.0)
}

/// Smooth-scroll so the section with `id` sits just below the header
pub fn scroll_to_section(id: &str, header_offset: f64) -> FeatureResult {
    let window = window()?;
    let target = document()?
        .get_element_by_id(id)
        .ok_or_else(|| FeatureError::MissingElement(format!("#{}", id)))?;
    let top = section_scroll_top(target.get_bounding_client_rect().top(), window.scroll_y()?, header_offset);
    smooth_scroll_to(&window, top);
    Ok(())
}

pub fn scroll_to_top() -> FeatureResult {
    smooth_scroll_to(&window()?, 0.0);
    Ok(())
}

fn smooth_scroll_to(window: &web_sys::Window, top: f64) {
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Observe every `.reveal` element and mark it visible the first time it
/// enters the viewport. Without IntersectionObserver everything is shown
/// immediately and the error is returned for logging.
pub fn observe_reveals() -> FeatureResult {
    let document = document()?;
    let nodes = document.query_selector_all(REVEAL_SELECTOR)?;
    let elements: Vec<web_sys::Element> = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect();

    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1(REVEALED_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(0.1));
    init.set_root_margin("0px 0px -50px 0px");

    let observer = match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => observer,
        Err(e) => {
            for element in &elements {
                let _ = element.class_list().add_1(REVEALED_CLASS);
            }
            return Err(e.into());
        }
    };
    for element in &elements {
        observer.observe(element);
    }
    callback.forget();
    log::debug!("[SCROLL] Observing {} reveal elements", elements.len());
    Ok(())
}
