//! Back-to-top Button

use leptos::prelude::*;

use crate::scroll;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn BackToTop() -> impl IntoView {
    let store = use_app_store();

    view! {
        <button
            class="back-to-top"
            class:visible=move || store.show_back_to_top().get()
            aria-label="Back to top"
            on:click=move |_| {
                if let Err(e) = scroll::scroll_to_top() {
                    log::warn!("[SCROLL] {}", e);
                }
            }
        >
            "↑"
        </button>
    }
}
