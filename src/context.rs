//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::cart::CartModel;
use crate::config::SiteConfig;
use crate::models::{MenuItem, NotifyKind};
use crate::notify::Notifier;
use crate::storage::BrowserStorage;
use crate::store::{store_set_cart, AppStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    pub notifier: Notifier,
    config: StoredValue<SiteConfig>,
    catalog: StoredValue<Vec<MenuItem>>,
}

impl AppContext {
    pub fn new(store: AppStore, notifier: Notifier, config: SiteConfig, catalog: Vec<MenuItem>) -> Self {
        Self {
            store,
            notifier,
            config: StoredValue::new(config),
            catalog: StoredValue::new(catalog),
        }
    }

    pub fn config(&self) -> SiteConfig {
        self.config.get_value()
    }

    pub fn catalog(&self) -> Vec<MenuItem> {
        self.catalog.get_value()
    }

    pub fn find_item(&self, id: &str) -> Option<MenuItem> {
        self.catalog.with_value(|items| items.iter().find(|i| i.id == id).cloned())
    }

    fn cart_model(&self) -> CartModel<BrowserStorage> {
        CartModel::browser(&self.config.with_value(|c| c.storage_key.clone()))
    }

    /// Add to the persisted cart and tell the user
    pub fn add_to_cart(&self, item: &MenuItem) {
        let cart = self.cart_model().add(item);
        store_set_cart(&self.store, cart);
        self.notifier.show(format!("{} added to cart!", item.title), NotifyKind::Success);
    }

    pub fn remove_from_cart(&self, id: &str) {
        let cart = self.cart_model().remove(id);
        store_set_cart(&self.store, cart);
    }

    pub fn clear_cart(&self) {
        let cart = self.cart_model().clear();
        store_set_cart(&self.store, cart);
        self.notifier.show("Cart cleared", NotifyKind::Info);
    }
}

/// Get the app context; provided by `App`
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
