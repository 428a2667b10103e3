//! File-backed store: a JSON string-to-string map at a fixed path.
//!
//! The whole map is read once on open and rewritten on every mutation; the
//! state is a handful of short strings, so durability beats cleverness.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::{StateStore, StoreError};

pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`.
    ///
    /// A missing file is an empty store. A malformed file is discarded with
    /// a warning and treated as empty — stale or corrupted session state
    /// must never prevent startup.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let entries = match fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(err) => {
                    warn!(path = %path.display(), %err, "discarding malformed state file");
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(StoreError::Io(err)),
        };
        info!(path = %path.display(), entries = entries.len(), "opened state store");
        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    fn persist(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl StateStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.entries.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys;

    #[test]
    fn missing_file_opens_empty() {
        let tmp = tempfile::TempDir::new().unwrap();
        let store = FileStore::open(&tmp.path().join("state.json")).unwrap();
        assert_eq!(store.get(keys::LAST_FILTERS), None);
    }

    #[test]
    fn values_survive_reopen() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("state.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set(keys::LAST_FILTERS, "{\"keywords\":[\"cloud\"]}").unwrap();
        store.set(keys::VIEW_MODE, "table").unwrap();
        drop(store);

        let store = FileStore::open(&path).unwrap();
        assert_eq!(
            store.get(keys::LAST_FILTERS).as_deref(),
            Some("{\"keywords\":[\"cloud\"]}")
        );
        assert_eq!(store.get(keys::VIEW_MODE).as_deref(), Some("table"));
    }

    #[test]
    fn remove_persists() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("state.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set(keys::PRESET, "{}").unwrap();
        store.remove(keys::PRESET).unwrap();
        drop(store);

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get(keys::PRESET), None);
    }

    #[test]
    fn malformed_file_is_discarded_not_fatal() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("state.json");
        fs::write(&path, "not json at all").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get(keys::LAST_FILTERS), None);
    }

    #[test]
    fn parent_directories_are_created_on_first_write() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("dir").join("state.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set(keys::VIEW_MODE, "cards").unwrap();
        assert!(path.exists());
    }
}
