//! Storage Adapter
//!
//! Key-value persistence behind a small trait. The browser build uses
//! `localStorage`; tests use `MemoryStore`.

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

use crate::models::CartEntry;

/// Storage-level errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("read failed: {0}")]
    Read(String),
    #[error("write failed: {0}")]
    Write(String),
    #[error("could not encode cart: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("could not decode cart: {0}")]
    Deserialize(#[source] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// String key-value store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> StorageResult<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".into()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".into()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one raw value
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads and writes the serialized cart under one key
#[derive(Debug, Clone)]
pub struct CartStorage<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> CartStorage<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    /// `Ok(None)` when nothing has been stored yet
    pub fn read(&self) -> StorageResult<Option<Vec<CartEntry>>> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(None);
        };
        let entries = serde_json::from_str(&raw).map_err(StorageError::Deserialize)?;
        Ok(Some(entries))
    }

    pub fn write(&self, entries: &[CartEntry]) -> StorageResult<()> {
        let raw = serde_json::to_string(entries).map_err(StorageError::Serialize)?;
        self.store.set(&self.key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert!(store.get("k").unwrap().is_none());
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_read_missing_key() {
        let storage = CartStorage::new(MemoryStore::new(), "cart");
        assert!(storage.read().unwrap().is_none());
    }

    #[test]
    fn test_read_malformed_value() {
        let storage = CartStorage::new(MemoryStore::with_value("cart", "{not json"), "cart");
        assert!(matches!(storage.read(), Err(StorageError::Deserialize(_))));
    }

    #[test]
    fn test_read_legacy_entries() {
        let raw = r#"[{"id":"latte","title":"Latte","description":"Milky","price":"$4.25","image":"latte.jpg","category":"coffee","quantity":2}]"#;
        let storage = CartStorage::new(MemoryStore::with_value("cart", raw), "cart");

        let entries = storage.read().unwrap().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].price.cents(), 425);
        assert_eq!(entries[0].quantity, 2);
    }
}
