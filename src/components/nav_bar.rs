//! Navigation Bar Component
//!
//! Fixed header with section links, the mobile hamburger toggle and the
//! cart button.

use leptos::prelude::*;

use crate::cart;
use crate::context::use_app_context;
use crate::scroll;
use crate::store::AppStateStoreFields;

/// (section id, label)
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("menu", "Menu"),
    ("about", "About"),
    ("contact", "Contact"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let header_offset = ctx.config().header_offset_px;

    // Close the mobile menu, then glide to the section
    let go_to = move |section: &'static str| {
        store.nav_open().set(false);
        if let Err(e) = scroll::scroll_to_section(section, header_offset) {
            log::warn!("[NAV] Cannot scroll to {}: {}", section, e);
        }
    };

    let item_count = move || store.cart().with(|c| cart::totals(c).item_count);

    view! {
        <header class="site-header" class:scrolled=move || store.header_scrolled().get()>
            <nav class="nav-container">
                <a
                    href="#home"
                    class="nav-logo"
                    on:click=move |ev| {
                        ev.prevent_default();
                        go_to("home");
                    }
                >
                    "Brew Haven"
                </a>

                <ul class="nav-links" class:open=move || store.nav_open().get()>
                    {NAV_LINKS.iter().map(|&(section, label)| view! {
                        <li>
                            <a
                                href=format!("#{}", section)
                                class="nav-link"
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    go_to(section);
                                }
                            >
                                {label}
                            </a>
                        </li>
                    }).collect_view()}
                </ul>

                <button
                    class="cart-toggle"
                    aria-label="Open cart"
                    on:click=move |_| store.cart_open().update(|open| *open = !*open)
                >
                    "🛒"
                    <span class="cart-badge" class:hidden=move || item_count() == 0>
                        {item_count}
                    </span>
                </button>

                <button
                    class="nav-toggle"
                    class:active=move || store.nav_open().get()
                    aria-label="Toggle navigation"
                    aria-expanded=move || store.nav_open().get().to_string()
                    on:click=move |_| store.nav_open().update(|open| *open = !*open)
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </nav>
        </header>
    }
}
