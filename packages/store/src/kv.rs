//! # Key/value storage seam
//!
//! Everything the dashboard keeps between page loads is a handful of string
//! entries (the session token and the email captured at registration). The
//! [`KeyValueStore`] trait is the single seam between that state and the
//! platform that holds it:
//!
//! | Implementation | Platform |
//! |----------------|----------|
//! | [`crate::MemoryStore`] | tests and anything that must not persist |
//! | [`crate::FileStore`] | native builds, a JSON file under the data dir |
//! | `LocalStorageStore` | browser builds (`wasm32` + `web` feature) |
//!
//! Backends never surface errors. A storage that cannot be read behaves as if
//! it were empty, and a failed write is dropped. The consequence for the user
//! is at worst "signed out", which the route guard already handles.

/// Synchronous string storage keyed by name.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
    /// Drop every entry owned by this store.
    fn clear(&self);
}
