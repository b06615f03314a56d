//! Platform session vault.
//!
//! - **Web** (WASM + `web` feature): browser `localStorage` via [`store::LocalStorageStore`]
//! - **Desktop** (native): a JSON file under the platform data dir via [`store::FileStore`]
//! - **WASM without `web`**: in-memory only

use store::SessionVault;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorageStore;

#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStore = store::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = store::FileStore;

/// Open the vault for the current platform.
pub fn make_vault() -> SessionVault<PlatformStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionVault::new(store::LocalStorageStore::new())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        SessionVault::new(store::MemoryStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("green-world");
        SessionVault::new(store::FileStore::new(base))
    }
}
