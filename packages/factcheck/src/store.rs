//! Append-only result store - a flat JSON array on disk.
//!
//! Append is a read-entire-file / push / rewrite-file cycle; concurrent
//! writers from multiple processes may lose records, an accepted
//! limitation of the single-user scope. An unreadable existing file is
//! treated as empty and overwritten on the next append.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::error::StoreError;

/// File-backed append-only sequence of result records.
pub struct ResultStore {
    path: PathBuf,
}

impl ResultStore {
    /// Create a store writing to the given path. The file is created on
    /// first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all persisted records. A missing or corrupt file yields an
    /// empty list.
    pub fn load(&self) -> Vec<Value> {
        let Ok(data) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        match serde_json::from_str(&data) {
            Ok(Value::Array(records)) => records,
            Ok(_) | Err(_) => {
                warn!(path = %self.path.display(), "result store unreadable, treating as empty");
                Vec::new()
            }
        }
    }

    /// Append one record, rewriting the whole file.
    pub fn append<T: Serialize>(&self, record: &T) -> Result<(), StoreError> {
        let mut records = self.load();
        records.push(serde_json::to_value(record)?);

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(&records)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = ResultStore::new(dir.path().join("results.json"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn append_then_load_round_trips_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = ResultStore::new(dir.path().join("results.json"));

        store.append(&json!({"claim": "first"})).unwrap();
        store.append(&json!({"claim": "second"})).unwrap();

        let records = store.load();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["claim"], "first");
        assert_eq!(records[1]["claim"], "second");
    }

    #[test]
    fn corrupt_file_is_treated_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        fs::write(&path, "{not valid json").unwrap();

        let store = ResultStore::new(&path);
        assert!(store.load().is_empty());

        // Next append overwrites the corrupt file with a fresh array.
        store.append(&json!({"ok": true})).unwrap();
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn non_array_json_is_treated_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        fs::write(&path, r#"{"a": 1}"#).unwrap();
        assert!(ResultStore::new(&path).load().is_empty());
    }

    #[test]
    fn parent_directories_are_created() {
        let dir = tempfile::tempdir().unwrap();
        let store = ResultStore::new(dir.path().join("data").join("results.json"));
        store.append(&json!({"ok": true})).unwrap();
        assert_eq!(store.load().len(), 1);
    }
}
