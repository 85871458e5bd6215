// Durable client-side storage

pub mod kv;
pub mod bookmarks;

// Native file store (NOT compiled for WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod file;

// Browser localStorage (WASM only)
#[cfg(target_arch = "wasm32")]
pub mod local;

pub use kv::{KeyValueStore, MemoryStore};
pub use bookmarks::{BookmarkStore, FAVORITE_APPS_KEY, PINNED_PAGES_KEY};

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use local::LocalStorage;

/// The durable store of the current platform
#[cfg(target_arch = "wasm32")]
pub type PlatformStore = LocalStorage;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = FileStore;

#[cfg(target_arch = "wasm32")]
pub fn platform_store() -> PlatformStore {
    LocalStorage::new()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn platform_store() -> PlatformStore {
    FileStore::new(crate::config::StoreConfig::resolve(None).path)
}
