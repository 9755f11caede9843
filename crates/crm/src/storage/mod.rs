//! Pluggable key-value persistence.
//!
//! The session store only needs the browser-local-storage surface: get,
//! set, and remove string values by key. Implementations are synchronous
//! and must be safe to share across threads.
//!
//! - [`MemoryStore`] - shared in-memory map, the default for tests
//! - [`FileStore`] - one file per key under a directory, for desktop use

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::sync::Arc;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The key contains characters the backend cannot accept.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    /// The underlying I/O operation failed.
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// A minimal string key-value store.
///
/// Values are opaque to the store; callers serialize to JSON before
/// writing. `get` of an absent key is `Ok(None)` and `remove` of an
/// absent key is a no-op, so both are safe to call unconditionally.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or the backend cannot be
    /// written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Shared handle to a storage backend.
pub type SharedStore = Arc<dyn KeyValueStore>;
