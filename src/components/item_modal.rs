//! Item Detail Modal

use leptos::prelude::*;

use crate::catalog::category_label;
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

/// Detail view for the item in `open_item`. Closes on backdrop click,
/// the close button or Escape (see `page_events::bind_escape`).
#[component]
pub fn ItemModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let item = move || store.open_item().get().and_then(|id| ctx.find_item(&id));
    let close = move || store.open_item().set(None);

    view! {
        {move || item().map(|item| {
            let for_cart = item.clone();
            let label = category_label(&item.category).to_string();
            let alt = item.title.clone();
            view! {
                <div class="modal-backdrop" on:click=move |_| close()>
                    <div
                        class="modal"
                        role="dialog"
                        aria-modal="true"
                        on:click=|ev| ev.stop_propagation()
                    >
                        <button class="modal-close" aria-label="Close" on:click=move |_| close()>
                            "×"
                        </button>
                        <img class="modal-image" src=item.image alt=alt />
                        <div class="modal-body">
                            <span class="modal-category">{label}</span>
                            <h3 class="modal-title">{item.title}</h3>
                            <p class="modal-description">{item.description}</p>
                            <div class="modal-footer">
                                <span class="price">{item.price.to_string()}</span>
                                <button
                                    class="add-to-cart-btn"
                                    on:click=move |_| {
                                        ctx.add_to_cart(&for_cart);
                                        close();
                                    }
                                >
                                    "Add to Cart"
                                </button>
                            </div>
                        </div>
                    </div>
                </div>
            }
        })}
    }
}
