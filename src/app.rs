//! Coffee Shop App
//!
//! Root component: builds the store and context, lays out the page
//! sections and starts the page-level behaviors once the DOM is mounted.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::cart::CartModel;
use crate::catalog;
use crate::components::{BackToTop, CartPanel, ContactSection, ItemModal, MenuSection, NavBar, ToastStack};
use crate::config::SiteConfig;
use crate::context::AppContext;
use crate::features::{init_groups, FeatureGroup};
use crate::location::current_fragment;
use crate::menu::{categories, restore_from_fragment};
use crate::notify::Notifier;
use crate::page_events::{bind_escape, bind_resize, bind_scroll_effects};
use crate::scroll;
use crate::store::{store_apply_category, AppState, AppStore};

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    let items = catalog::menu_items();
    let cart = CartModel::browser(&config.storage_key).load();
    log::info!("[APP] {} menu items, {} cart entries", items.len(), cart.entries().len());

    let store: AppStore = Store::new(AppState::new(cart));
    let notifier = Notifier::new(config.toast_duration_ms);
    let ctx = AppContext::new(store, notifier, config.clone(), items);
    provide_context(store);
    provide_context(ctx);

    // Untracked: runs once after mount
    Effect::new(move |_| {
        let available = categories(&ctx.catalog());
        init_groups(vec![
            FeatureGroup::new("deep-link", || {
                if let Some(category) = restore_from_fragment(&current_fragment(), &available) {
                    log::info!("[APP] Restoring menu filter '{}'", category);
                    store_apply_category(&store, &category);
                }
                Ok(())
            }),
            FeatureGroup::new("scroll-reveal", scroll::observe_reveals),
            FeatureGroup::new("header-scroll", || bind_scroll_effects(store, config.scroll_throttle_ms)),
            FeatureGroup::new("mobile-nav", || {
                bind_resize(store, config.mobile_breakpoint_px, config.resize_debounce_ms)
            }),
            FeatureGroup::new("keyboard", || bind_escape(store)),
        ]);
    });

    view! {
        <NavBar />
        <CartPanel />

        <main>
            <section id="home" class="hero">
                <div class="hero-content">
                    <h1>"Brew Haven"</h1>
                    <p>"Small-batch coffee, loose-leaf tea and pastries baked every morning."</p>
                    <a href="#menu" class="cta-btn" on:click=move |ev| {
                        ev.prevent_default();
                        if let Err(e) = scroll::scroll_to_section("menu", ctx.config().header_offset_px) {
                            log::warn!("[APP] {}", e);
                        }
                    }>
                        "View Menu"
                    </a>
                </div>
            </section>

            <MenuSection />

            <section id="about" class="about-section">
                <h2 class="section-title reveal">"About Us"</h2>
                <div class="about-grid">
                    <p class="reveal">
                        "We roast in small batches and source directly from farms we know by name."
                    </p>
                    <p class="reveal">
                        "Everything on the counter is made in-house, from the syrups to the croissants."
                    </p>
                </div>
            </section>

            <ContactSection />
        </main>

        <footer class="site-footer">
            <p>"© Brew Haven. All rights reserved."</p>
        </footer>

        <ItemModal />
        <ToastStack />
        <BackToTop />
    }
}
