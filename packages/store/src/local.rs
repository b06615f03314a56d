//! # `localStorage` store: browser-side persistence
//!
//! [`LocalStorageStore`] is the [`KeyValueStore`] used on the **web platform**.
//! Entries are written to `window.localStorage` under a fixed prefix so that
//! [`KeyValueStore::clear`] only removes what the dashboard owns, not unrelated
//! keys another app put on the same origin.
//!
//! ## Error handling
//!
//! All trait methods swallow errors (returning `None` for reads, doing nothing
//! for writes). Private browsing modes and storage quotas make `localStorage`
//! unavailable in practice; the dashboard then behaves as signed out.

use web_sys::Storage;

use crate::kv::KeyValueStore;

const PREFIX: &str = "green-world";

/// `window.localStorage`-backed KeyValueStore for the web platform.
#[derive(Clone, Debug)]
pub struct LocalStorageStore {
    prefix: String,
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalStorageStore {
    /// Keys are written as `"<prefix>:<key>"`.
    pub fn new() -> Self {
        Self {
            prefix: PREFIX.to_string(),
        }
    }

    fn storage(&self) -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    fn scoped(&self, key: &str) -> String {
        format!("{}:{}", self.prefix, key)
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(&self.scoped(key)).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = self.storage() else {
            return;
        };
        if storage.set_item(&self.scoped(key), value).is_err() {
            tracing::warn!("localStorage rejected write for {}", key);
        }
    }

    fn remove(&self, key: &str) {
        let Some(storage) = self.storage() else {
            return;
        };
        if storage.remove_item(&self.scoped(key)).is_err() {
            tracing::warn!("localStorage rejected removal of {}", key);
        }
    }

    fn clear(&self) {
        let Some(storage) = self.storage() else {
            return;
        };
        let len = storage.length().unwrap_or(0);
        let owned_prefix = format!("{}:", self.prefix);
        // Collect first: removing while indexing shifts positions
        let owned: Vec<String> = (0..len)
            .filter_map(|i| storage.key(i).ok().flatten())
            .filter(|k| k.starts_with(&owned_prefix))
            .collect();
        for key in owned {
            let _ = storage.remove_item(&key);
        }
    }
}
