//! Local bookmark store
//!
//! Sole owner of the persisted favorites and pinned-page lists. Reads never
//! fail: a missing, unreadable or malformed entry is an empty list. Writes
//! overwrite the whole entry. No versioning or migration happens here.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::kv::KeyValueStore;
use crate::domain::models::Pin;
use crate::shared::logging;

pub const FAVORITE_APPS_KEY: &str = "nova_favorite_apps";
pub const PINNED_PAGES_KEY: &str = "nova_pinned_pages";

#[derive(Debug, Clone)]
pub struct BookmarkStore<S> {
    backend: S,
}

impl<S: KeyValueStore> BookmarkStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn get_favorite_app_ids(&self) -> Vec<i64> {
        self.read_list(FAVORITE_APPS_KEY)
    }

    /// Returns false when the write was rejected by the backend.
    pub fn set_favorite_app_ids(&self, ids: &[i64]) -> bool {
        self.write_list(FAVORITE_APPS_KEY, ids)
    }

    pub fn get_pinned_pages(&self) -> Vec<Pin> {
        self.read_list(PINNED_PAGES_KEY)
    }

    pub fn set_pinned_pages(&self, pins: &[Pin]) -> bool {
        self.write_list(PINNED_PAGES_KEY, pins)
    }

    fn read_list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let raw = match self.backend.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                logging::log_storage_read_error(key, &e.to_string());
                return Vec::new();
            }
        };

        // A stored `null` reads as empty, like a missing entry
        match serde_json::from_str::<Option<Vec<T>>>(&raw) {
            Ok(list) => list.unwrap_or_default(),
            Err(e) => {
                logging::log_storage_read_error(key, &e.to_string());
                Vec::new()
            }
        }
    }

    fn write_list<T: Serialize>(&self, key: &str, items: &[T]) -> bool {
        let json = match serde_json::to_string(items) {
            Ok(json) => json,
            Err(e) => {
                logging::log_storage_write_error(key, &e.to_string());
                return false;
            }
        };
        match self.backend.set_item(key, &json) {
            Ok(()) => true,
            Err(e) => {
                logging::log_storage_write_error(key, &e.to_string());
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{PageInfo, PinKey};
    use crate::infrastructure::storage::MemoryStore;
    use crate::shared::errors::{AppError, Result};

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get_item(&self, _key: &str) -> Result<Option<String>> {
            Err(AppError::StorageUnavailable("quota".into()))
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<()> {
            Err(AppError::StorageUnavailable("quota".into()))
        }

        fn remove_item(&self, _key: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_favorite_ids_roundtrip() {
        let store = BookmarkStore::new(MemoryStore::new());
        assert!(store.get_favorite_app_ids().is_empty());

        assert!(store.set_favorite_app_ids(&[5, 1, 9]));
        assert_eq!(store.get_favorite_app_ids(), vec![5, 1, 9]);
        assert_eq!(store.backend().raw(FAVORITE_APPS_KEY).as_deref(), Some("[5,1,9]"));

        assert!(store.set_favorite_app_ids(&[]));
        assert!(store.get_favorite_app_ids().is_empty());
    }

    #[test]
    fn test_corrupt_pins_entry_reads_empty() {
        let backend = MemoryStore::new();
        backend.set_item(PINNED_PAGES_KEY, "{not json").unwrap();
        backend.set_item(FAVORITE_APPS_KEY, r#"{"a": 1}"#).unwrap();

        let store = BookmarkStore::new(backend);
        assert!(store.get_pinned_pages().is_empty());
        assert!(store.get_favorite_app_ids().is_empty());
    }

    #[test]
    fn test_null_entry_reads_empty() {
        let backend = MemoryStore::new();
        backend.set_item(PINNED_PAGES_KEY, "null").unwrap();
        assert!(BookmarkStore::new(backend).get_pinned_pages().is_empty());
    }

    #[test]
    fn test_pins_roundtrip_with_legacy_records() {
        let backend = MemoryStore::new();
        backend
            .set_item(
                PINNED_PAGES_KEY,
                r#"[{"actionID": 7, "name": "X", "appId": 1, "appName": "A"},
                    {"key": "9:form:3", "actionID": 9, "viewType": "form", "model": "res.partner",
                     "resId": 3, "name": "Y", "appId": 2, "appName": "B"}]"#,
            )
            .unwrap();
        let store = BookmarkStore::new(backend);

        let pins = store.get_pinned_pages();
        assert_eq!(pins.len(), 2);
        assert_eq!(pins[0].key(), PinKey::from("7::"));
        assert_eq!(pins[1].model.as_deref(), Some("res.partner"));

        let fresh = Pin::from_page(&PageInfo::new(4), "Z".into(), None, None);
        assert!(store.set_pinned_pages(&[fresh.clone()]));
        assert_eq!(store.get_pinned_pages(), vec![fresh]);
    }

    #[test]
    fn test_failing_backend_is_absorbed() {
        let store = BookmarkStore::new(BrokenStore);
        assert!(store.get_favorite_app_ids().is_empty());
        assert!(store.get_pinned_pages().is_empty());
        assert!(!store.set_favorite_app_ids(&[1]));
    }
}
