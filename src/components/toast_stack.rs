//! Toast Stack Component

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ToastStack() -> impl IntoView {
    let notifier = use_app_context().notifier;

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || notifier.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("notification notification-{}", toast.kind.as_str()) role="status">
                            <span class="notification-message">{toast.message}</span>
                            <button
                                class="notification-close"
                                aria-label="Dismiss"
                                on:click=move |_| notifier.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
