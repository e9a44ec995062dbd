//! Menu Card Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::MenuItem;
use crate::store::AppStateStoreFields;

/// Stagger between card fade-ins
const STAGGER_MS: usize = 50;

/// One grid card. Clicking the card opens the detail modal; the button adds
/// straight to the cart.
#[component]
pub fn MenuCard(item: MenuItem, index: usize) -> impl IntoView {
    let ctx = use_app_context();
    let for_cart = item.clone();
    let MenuItem { id, title, description, price, image, category } = item;

    view! {
        <article
            class="menu-card fade-in"
            style=format!("animation-delay: {}ms;", index * STAGGER_MS)
            data-category=category
            on:click=move |_| ctx.store.open_item().set(Some(id.clone()))
        >
            <img src=image alt=title.clone() loading="lazy" />
            <div class="menu-card-body">
                <h3 class="menu-card-title">{title}</h3>
                <p class="menu-card-description">{description}</p>
                <div class="menu-card-footer">
                    <span class="price">{price.to_string()}</span>
                    <button
                        class="add-to-cart-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            ctx.add_to_cart(&for_cart);
                        }
                    >
                        "Add to Cart"
                    </button>
                </div>
            </div>
        </article>
    }
}
