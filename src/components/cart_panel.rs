//! Cart Panel Component
//!
//! Slide-in list of cart entries with per-line removal and a guarded
//! "Clear cart" action.

use leptos::prelude::*;

use super::ConfirmButton;
use crate::cart;
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn CartPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let entries = move || store.cart().with(|c| c.entries().to_vec());
    let totals = move || store.cart().with(cart::totals);
    let is_empty = Signal::derive(move || store.cart().with(|c| c.is_empty()));

    view! {
        <aside class="cart-panel" class:open=move || store.cart_open().get() aria-label="Shopping cart">
            <div class="cart-header">
                <h3>"Your Cart"</h3>
                <button class="cart-close" aria-label="Close cart" on:click=move |_| store.cart_open().set(false)>
                    "×"
                </button>
            </div>

            <Show
                when=move || !is_empty.get()
                fallback=|| view! { <p class="cart-empty">"Your cart is empty."</p> }
            >
                <ul class="cart-items">
                    <For
                        each=entries
                        key=|entry| (entry.id.clone(), entry.quantity)
                        children=move |entry| {
                            let id = entry.id.clone();
                            view! {
                                <li class="cart-item">
                                    <span class="cart-item-title">{entry.title.clone()}</span>
                                    <span class="cart-item-qty">{format!("×{}", entry.quantity)}</span>
                                    <span class="cart-item-total">{entry.line_total().to_string()}</span>
                                    <button
                                        class="cart-item-remove"
                                        aria-label="Remove"
                                        on:click=move |_| ctx.remove_from_cart(&id)
                                    >
                                        "×"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>

            <div class="cart-footer">
                <div class="cart-summary">
                    <span>{move || format!("{} items", totals().item_count)}</span>
                    <span class="cart-total">{move || totals().total.to_string()}</span>
                </div>
                <ConfirmButton
                    label="Clear cart"
                    button_class="cart-clear-btn"
                    disabled=is_empty
                    on_confirm=move |_| ctx.clear_cart()
                />
            </div>
        </aside>
    }
}
