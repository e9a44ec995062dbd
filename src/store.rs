//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The app root
//! owns the only store; core modules get plain values in and hand new
//! values back.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::cart::Cart;
use crate::menu::MenuView;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Cart as last loaded from or written to storage
    pub cart: Cart,
    /// Menu filter selection
    pub menu: MenuView,
    /// Item shown in the detail modal
    pub open_item: Option<String>,
    /// Mobile navigation expanded
    pub nav_open: bool,
    /// Cart panel expanded
    pub cart_open: bool,
    /// Page scrolled past the header threshold
    pub header_scrolled: bool,
    /// Page scrolled far enough to offer "back to top"
    pub show_back_to_top: bool,
}

impl AppState {
    pub fn new(cart: Cart) -> Self {
        Self {
            cart,
            menu: MenuView::new(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the cart after a model operation
pub fn store_set_cart(store: &AppStore, cart: Cart) {
    store.cart().set(cart);
}

/// Select a category filter
pub fn store_apply_category(store: &AppStore, category: &str) {
    let next = store.menu().with_untracked(|menu| menu.with_category(category));
    store.menu().set(next);
}

/// Apply a text search
pub fn store_apply_search(store: &AppStore, text: &str) {
    let next = store.menu().with_untracked(|menu| menu.with_search(text));
    store.menu().set(next);
}

/// Close every overlay (nav, cart panel, item modal)
pub fn store_close_overlays(store: &AppStore) {
    store.nav_open().set(false);
    store.cart_open().set(false);
    store.open_item().set(None);
}
