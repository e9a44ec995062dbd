//! Cart Model
//!
//! In-memory cart synchronized with the storage adapter. Every mutation
//! reads the persisted copy, changes it and writes it back. There is only
//! one writer (the UI thread), so the last write wins.

use crate::models::{CartEntry, MenuItem};
use crate::price::Price;
use crate::storage::{BrowserStorage, CartStorage, KeyValueStore};

/// Cart entries in insertion order, at most one per id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CartEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Increment the matching entry or append a new one
    fn insert(&mut self, item: &MenuItem) {
        match self.entries.iter_mut().find(|entry| entry.id == item.id) {
            Some(entry) => entry.quantity = entry.quantity.saturating_add(1),
            None => self.entries.push(CartEntry::from_item(item)),
        }
    }

    /// Rebuild from persisted entries, merging duplicate ids and dropping
    /// zero quantities so the invariants hold for hand-edited storage too
    fn from_entries(entries: Vec<CartEntry>) -> Self {
        let mut cart = Cart::new();
        for entry in entries.into_iter().filter(|e| e.quantity > 0) {
            match cart.entries.iter_mut().find(|existing| existing.id == entry.id) {
                Some(existing) => existing.quantity = existing.quantity.saturating_add(entry.quantity),
                None => cart.entries.push(entry),
            }
        }
        cart
    }
}

/// Aggregates shown in the cart summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartTotals {
    pub item_count: u32,
    pub total: Price,
}

/// Sum quantities and price × quantity over the cart
pub fn totals(cart: &Cart) -> CartTotals {
    CartTotals {
        item_count: cart.entries.iter().map(|e| e.quantity).sum(),
        total: cart.entries.iter().map(CartEntry::line_total).sum(),
    }
}

/// Cart operations over a persisted store
pub struct CartModel<S> {
    storage: CartStorage<S>,
}

impl CartModel<BrowserStorage> {
    /// Cart backed by `localStorage`
    pub fn browser(key: &str) -> Self {
        Self::new(CartStorage::new(BrowserStorage, key))
    }
}

impl<S: KeyValueStore> CartModel<S> {
    pub fn new(storage: CartStorage<S>) -> Self {
        Self { storage }
    }

    /// Current cart. Missing or unreadable storage gives an empty cart.
    pub fn load(&self) -> Cart {
        match self.storage.read() {
            Ok(Some(entries)) => Cart::from_entries(entries),
            Ok(None) => Cart::new(),
            Err(e) => {
                log::warn!("[CART] Ignoring stored cart: {}", e);
                Cart::new()
            }
        }
    }

    pub fn add(&self, item: &MenuItem) -> Cart {
        let mut cart = self.load();
        cart.insert(item);
        self.persist(&cart);
        log::debug!("[CART] Added {} ({} entries)", item.id, cart.entries.len());
        cart
    }

    pub fn remove(&self, id: &str) -> Cart {
        let mut cart = self.load();
        cart.entries.retain(|entry| entry.id != id);
        self.persist(&cart);
        cart
    }

    pub fn clear(&self) -> Cart {
        let cart = Cart::new();
        self.persist(&cart);
        cart
    }

    fn persist(&self, cart: &Cart) {
        if let Err(e) = self.storage.write(&cart.entries) {
            log::warn!("[CART] Cart not persisted: {}", e);
        }
    }
}
