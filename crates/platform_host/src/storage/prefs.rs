//! Key/value preference storage used by widgets that persist their own state.
//!
//! Browser `localStorage` is synchronous, so the contract is synchronous as well. Values are JSON
//! text stored per key.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};

/// Host service for small JSON preference values.
pub trait PrefsStore {
    /// Loads the raw JSON string stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store is unavailable.
    fn load_pref(&self, key: &str) -> Result<Option<String>, String>;

    /// Stores `raw_json` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store rejects the write.
    fn save_pref(&self, key: &str, raw_json: &str) -> Result<(), String>;

    /// Removes `key` from the store.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store rejects the delete.
    fn delete_pref(&self, key: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Default)]
/// In-memory store; clones share the same map.
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPrefsStore {
    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.inner.borrow().get(key).cloned())
    }

    fn save_pref(&self, key: &str, raw_json: &str) -> Result<(), String> {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), raw_json.to_string());
        Ok(())
    }

    fn delete_pref(&self, key: &str) -> Result<(), String> {
        self.inner.borrow_mut().remove(key);
        Ok(())
    }
}

/// Loads and deserializes a typed value.
///
/// A missing key yields `Ok(None)`.
///
/// # Errors
///
/// Returns an error when the store fails or the stored JSON does not match `T`.
pub fn load_pref_typed<T: DeserializeOwned>(
    store: &dyn PrefsStore,
    key: &str,
) -> Result<Option<T>, String> {
    let Some(raw) = store.load_pref(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| format!("pref `{key}` is not valid: {e}"))
}

/// Serializes and saves a typed value.
///
/// # Errors
///
/// Returns an error when serialization or the store write fails.
pub fn save_pref_typed<T: Serialize>(
    store: &dyn PrefsStore,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
    store.save_pref(key, &raw)
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Volume {
        level: u8,
    }

    #[test]
    fn memory_store_clones_share_contents() {
        let store = MemoryPrefsStore::default();
        let other = store.clone();

        store.save_pref("wfc.key", "1").expect("save");
        assert_eq!(other.load_pref("wfc.key").expect("load"), Some("1".into()));

        other.delete_pref("wfc.key").expect("delete");
        assert!(store.is_empty());
    }

    #[test]
    fn typed_helpers_load_what_was_saved() {
        let store = MemoryPrefsStore::default();
        save_pref_typed(&store, "wfc.volume", &Volume { level: 7 }).expect("save");

        let loaded: Option<Volume> = load_pref_typed(&store, "wfc.volume").expect("load");
        assert_eq!(loaded, Some(Volume { level: 7 }));
    }

    #[test]
    fn typed_load_reports_malformed_json() {
        let store = MemoryPrefsStore::default();
        store.save_pref("wfc.volume", "{not json").expect("save");

        let err = load_pref_typed::<Volume>(&store, "wfc.volume").unwrap_err();
        assert!(err.contains("wfc.volume"));
    }
}
