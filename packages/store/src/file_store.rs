//! # Filesystem-backed key/value store
//!
//! [`FileStore`] keeps the dashboard's entries in a single JSON object on disk.
//! It is what native builds (`dx serve --platform desktop`, `cargo test`) use in
//! place of the browser's `localStorage`, so a session survives restarts there too.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── storage.json       # {"token": "...", "email": "..."}
//! ```
//!
//! The caller picks `base_dir`; the UI crate uses `dirs::data_dir()/green-world`.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::kv::KeyValueStore;

const FILE_NAME: &str = "storage.json";

/// Filesystem-backed KeyValueStore for native persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn file_path(&self) -> PathBuf {
        self.base.join(FILE_NAME)
    }

    fn load(&self) -> BTreeMap<String, String> {
        std::fs::read_to_string(self.file_path())
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    fn save(&self, entries: &BTreeMap<String, String>) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!("Failed to create {}: {}", self.base.display(), e);
            return;
        }
        match serde_json::to_string_pretty(entries) {
            Ok(raw) => {
                if let Err(e) = std::fs::write(self.file_path(), raw) {
                    tracing::warn!("Failed to write {}: {}", self.file_path().display(), e);
                }
            }
            Err(e) => tracing::warn!("Failed to encode storage: {}", e),
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.load().remove(key)
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.load();
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.load();
        if entries.remove(key).is_some() {
            self.save(&entries);
        }
    }

    fn clear(&self) {
        match std::fs::remove_file(self.file_path()) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("Failed to remove {}: {}", self.file_path().display(), e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionVault;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "green_world_store_{}_{}",
            tag,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = scratch_dir("roundtrip");

        let vault = SessionVault::new(FileStore::new(dir.clone()));
        vault.save_token("persisted-token");
        vault.remember_email("gardener@gmail.com");

        // Re-open from same directory
        let reopened = SessionVault::new(FileStore::new(dir.clone()));
        assert_eq!(reopened.token().as_deref(), Some("persisted-token"));
        assert_eq!(
            reopened.remembered_email().as_deref(),
            Some("gardener@gmail.com")
        );

        reopened.clear();
        assert!(SessionVault::new(FileStore::new(dir.clone())).token().is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_corrupt_file_reads_as_empty() {
        let dir = scratch_dir("corrupt");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(FILE_NAME), "{not json").unwrap();

        let store = FileStore::new(dir.clone());
        assert!(store.get("token").is_none());

        // A write replaces the unreadable file
        store.set("token", "fresh");
        assert_eq!(store.get("token").as_deref(), Some("fresh"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
