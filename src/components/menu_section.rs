//! Menu Section Component
//!
//! Category filter buttons, the debounced search box and the item grid.

use leptos::prelude::*;

use super::MenuCard;
use crate::catalog::category_label;
use crate::context::use_app_context;
use crate::location::replace_fragment;
use crate::menu::{categories, fragment_for_category};
use crate::models::ALL_CATEGORIES;
use crate::store::{store_apply_category, store_apply_search, AppStateStoreFields};
use crate::timing::Debouncer;

#[component]
pub fn MenuSection() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let catalog = ctx.catalog();
    let mut filters = vec![ALL_CATEGORIES.to_string()];
    filters.extend(categories(&catalog));

    let debouncer = StoredValue::new_local(Debouncer::new(ctx.config().search_debounce_ms));

    let select_category = move |category: String| {
        // A pending search would otherwise overwrite the new filter
        debouncer.with_value(|d| d.cancel());
        store_apply_category(&store, &category);
        if let Err(e) = replace_fragment(fragment_for_category(&category).as_deref()) {
            log::warn!("[MENU] Cannot update location fragment: {}", e);
        }
    };

    let on_search = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        debouncer.with_value(|d| d.call(move || store_apply_search(&store, &text)));
    };

    let visible = move || store.menu().with(|menu| menu.visible(&catalog));

    view! {
        <section id="menu" class="menu-section">
            <h2 class="section-title">"Our Menu"</h2>

            <div class="menu-controls">
                <div class="filter-buttons" role="group" aria-label="Filter by category">
                    {filters.into_iter().map(|category| {
                        let is_active = {
                            let category = category.clone();
                            move || store.menu().with(|m| m.active_category == category)
                        };
                        let label = category_label(&category).to_string();
                        let data_category = category.clone();
                        view! {
                            <button
                                class="filter-btn"
                                class:active=is_active
                                data-category=data_category
                                on:click=move |_| select_category(category.clone())
                            >
                                {label}
                            </button>
                        }
                    }).collect_view()}
                </div>

                <input
                    type="search"
                    class="menu-search"
                    placeholder="Search the menu..."
                    aria-label="Search the menu"
                    prop:value=move || store.menu().with(|m| m.search_text.clone())
                    on:input=on_search
                />
            </div>

            <div
                class="menu-grid"
                data-generation=move || store.menu().with(|m| m.generation.to_string())
            >
                {move || {
                    let items = visible();
                    if items.is_empty() {
                        view! {
                            <p class="menu-empty">"No items match your search."</p>
                        }.into_any()
                    } else {
                        items
                            .into_iter()
                            .enumerate()
                            .map(|(index, item)| view! { <MenuCard item=item index=index /> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
        </section>
    }
}
