//! Application state shared across the front end.

use std::sync::Arc;

use crate::config::{ConfigError, CrmConfig};
use crate::directory::UserDirectory;
use crate::sample;
use crate::services::auth::AuthService;
use crate::session::SessionStore;
use crate::storage::{FileStore, SharedStore};

/// Application state shared across all screens.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration, the user catalog, and the session store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: CrmConfig,
    directory: Arc<UserDirectory>,
    session: SessionStore,
}

impl AppState {
    /// Create application state over a storage backend.
    ///
    /// The user catalog is the seeded demo catalog; the session store is
    /// wired to `storage` but not yet initialized. Call
    /// [`SessionStore::initialize`] via [`session`](Self::session) at
    /// startup.
    #[must_use]
    pub fn new(config: CrmConfig, storage: SharedStore) -> Self {
        let directory = Arc::new(UserDirectory::new(sample::users()));
        let auth = AuthService::new(Arc::clone(&directory), config.demo_password.clone());
        let session = SessionStore::new(storage, auth, &config);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                directory,
                session,
            }),
        }
    }

    /// Create application state from environment configuration, persisting
    /// sessions under the configured storage directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment configuration is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = CrmConfig::from_env()?;
        let storage: SharedStore = Arc::new(FileStore::new(config.storage_dir.clone()));
        Ok(Self::new(config, storage))
    }

    /// Get a reference to the configuration.
    #[must_use]
    pub fn config(&self) -> &CrmConfig {
        &self.inner.config
    }

    /// Get a reference to the user catalog.
    #[must_use]
    pub fn directory(&self) -> &UserDirectory {
        &self.inner.directory
    }

    /// Get a reference to the session store.
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.inner.session
    }
}
