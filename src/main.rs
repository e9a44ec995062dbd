//! Brew Site Frontend Entry Point

mod app;
mod cart;
mod catalog;
mod components;
mod config;
mod context;
mod features;
mod location;
mod menu;
mod models;
mod notify;
mod page_events;
mod price;
mod scroll;
mod storage;
mod store;
mod submit;
mod timing;
mod validation;

use app::App;
use config::SiteConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, note) = SiteConfig::load();
    if let Err(e) = console_logger::init(config.level_filter(), console_logger::DEFAULT_CAPACITY) {
        web_sys::console::warn_1(&format!("logger already set: {}", e).into());
    }
    if let Some(note) = note {
        log::warn!("[APP] Using default config: {}", note);
    }
    log::info!("[APP] Starting (cart key '{}')", config.storage_key);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
