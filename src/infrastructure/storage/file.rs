//! File-backed key-value store for native builds
//!
//! The whole store is one JSON object of string values. Every call goes to
//! disk, so separate processes sharing the file see each other's writes.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::kv::KeyValueStore;
use crate::shared::errors::{AppError, Result};

type Document = BTreeMap<String, String>;

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<Document> {
        match fs::read(&self.path) {
            Ok(data) => serde_json::from_slice::<Document>(&data).map_err(AppError::from),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(Document::new()),
            Err(error) => Err(error.into()),
        }
    }

    fn write_document(&self, doc: &Document) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(doc)?;

        // Rename over the target so readers never see a half-written file
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_document()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        // An unreadable document is replaced rather than blocking writes
        let mut doc = self.read_document().unwrap_or_else(|error| {
            tracing::warn!(?error, path = ?self.path, "discarding unreadable store file");
            Document::new()
        });
        doc.insert(key.to_string(), value.to_string());
        self.write_document(&doc)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut doc = self.read_document()?;
        if doc.remove(key).is_some() {
            self.write_document(&doc)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("nova-theme-{}-{}", std::process::id(), name))
            .join("storage.json")
    }

    #[test]
    fn test_missing_file_reads_as_empty() {
        let store = FileStore::new(temp_path("missing"));
        assert_eq!(store.get_item("anything").unwrap(), None);
    }

    #[test]
    fn test_set_get_remove_persist_across_instances() {
        let path = temp_path("roundtrip");
        let store = FileStore::new(&path);
        store.set_item("nova_favorite_apps", "[1,2]").unwrap();
        store.set_item("other", "x").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get_item("nova_favorite_apps").unwrap().as_deref(), Some("[1,2]"));

        reopened.remove_item("other").unwrap();
        assert_eq!(store.get_item("other").unwrap(), None);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_corrupt_file_is_error_on_read_and_replaced_on_write() {
        let path = temp_path("corrupt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();

        let store = FileStore::new(&path);
        assert!(store.get_item("k").is_err());

        store.set_item("k", "v").unwrap();
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("v"));

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
