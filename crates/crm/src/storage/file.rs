//! File-backed key-value store.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, StorageError};

/// A store that keeps one file per key under a directory.
///
/// The desktop analogue of browser local storage. The directory is created
/// lazily on the first write, so constructing a store never touches disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory this store writes into.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolve the file path for a key, rejecting anything that could
    /// escape the storage directory.
    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key != "."
            && key != ".."
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
        if !valid {
            return Err(StorageError::InvalidKey(key.to_owned()));
        }
        Ok(self.dir.join(key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;
        fs::write(path, value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err),
        }
        .map_err(Into::into)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("clementine"));

        assert_eq!(store.get("crm_user").unwrap(), None);

        store.set("crm_user", "{\"id\":\"demo\"}").unwrap();
        assert_eq!(
            store.get("crm_user").unwrap().as_deref(),
            Some("{\"id\":\"demo\"}")
        );

        store.remove("crm_user").unwrap();
        assert_eq!(store.get("crm_user").unwrap(), None);
    }

    #[test]
    fn test_remove_absent_key_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        store.remove("crm_user").unwrap();
    }

    #[test]
    fn test_construction_does_not_create_dir() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("never_written");
        let _store = FileStore::new(&root);
        assert!(!root.exists());
    }

    #[test]
    fn test_rejects_path_escaping_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        for key in ["", ".", "..", "../evil", "a/b", "a\\b"] {
            assert!(
                matches!(store.set(key, "x"), Err(StorageError::InvalidKey(_))),
                "key {key:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("clementine");

        FileStore::new(&root).set("crm_user", "persisted").unwrap();

        let reopened = FileStore::new(&root);
        assert_eq!(reopened.get("crm_user").unwrap().as_deref(), Some("persisted"));
    }
}
