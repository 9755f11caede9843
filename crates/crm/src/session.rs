//! Session lifecycle: restore, sign in, sign out.
//!
//! The session is an explicitly owned handle, not a global. A host
//! constructs one [`SessionStore`] per app instance, calls
//! [`initialize`](SessionStore::initialize) once at startup to restore any
//! persisted sign-in, and hands clones to whatever needs to query or
//! change it.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use tracing::{debug, instrument, warn};

use crate::config::CrmConfig;
use crate::models::UserProfile;
use crate::services::auth::{AuthError, AuthService};
use crate::storage::SharedStore;

/// Storage keys for persisted session data.
pub mod keys {
    /// Key for the signed-in user profile.
    pub const CURRENT_USER: &str = "crm_user";
}

/// Where the session is in its lifecycle.
///
/// A single enum so that no half-signed-in state is representable: a
/// profile exists if and only if the state is `Active`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    /// `initialize` has not run yet.
    #[default]
    Uninitialized,
    /// A restore or sign-in is in flight.
    Resolving,
    /// Nobody is signed in.
    Empty,
    /// A user is signed in.
    Active(UserProfile),
}

impl SessionState {
    /// The lightweight discriminant used by guards and UIs.
    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        match self {
            Self::Uninitialized => SessionPhase::Uninitialized,
            Self::Resolving => SessionPhase::Resolving,
            Self::Empty => SessionPhase::Empty,
            Self::Active(_) => SessionPhase::Active,
        }
    }
}

/// Discriminant of [`SessionState`] without the profile payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Uninitialized,
    Resolving,
    Empty,
    Active,
}

impl SessionPhase {
    /// Whether the phase still counts as "loading" for route guards.
    #[must_use]
    pub const fn is_settling(self) -> bool {
        matches!(self, Self::Uninitialized | Self::Resolving)
    }
}

/// The session store.
///
/// Cheaply cloneable via `Arc`; clones share one state. The lock is never
/// held across an await point, so concurrent sign-in attempts race
/// harmlessly and the last writer wins.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<SessionStoreInner>,
}

struct SessionStoreInner {
    state: RwLock<SessionState>,
    storage: SharedStore,
    auth: AuthService,
    storage_key: String,
    login_delay: Duration,
}

impl SessionStore {
    /// Create a session store over a storage backend.
    ///
    /// The store starts [`Uninitialized`](SessionState::Uninitialized);
    /// call [`initialize`](Self::initialize) to restore a persisted
    /// session.
    #[must_use]
    pub fn new(storage: SharedStore, auth: AuthService, config: &CrmConfig) -> Self {
        Self {
            inner: Arc::new(SessionStoreInner {
                state: RwLock::new(SessionState::Uninitialized),
                storage,
                auth,
                storage_key: config.session_key.clone(),
                login_delay: config.login_delay,
            }),
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Restore the session from storage.
    ///
    /// Resolves to `Active` if a stored profile parses, `Empty` otherwise.
    /// Any storage failure or malformed entry resolves to `Empty` silently;
    /// a stale sign-in is never worth an error screen. Callable again at
    /// any time to re-read storage (a host restart does exactly that).
    pub fn initialize(&self) {
        let restored = match self.inner.storage.get(&self.inner.storage_key) {
            Ok(Some(json)) => match serde_json::from_str::<UserProfile>(&json) {
                Ok(profile) => {
                    debug!(user = %profile.id, "restored persisted session");
                    SessionState::Active(profile)
                }
                Err(err) => {
                    warn!(%err, "discarding unreadable persisted session");
                    SessionState::Empty
                }
            },
            Ok(None) => SessionState::Empty,
            Err(err) => {
                warn!(%err, "session storage unavailable; starting signed out");
                SessionState::Empty
            }
        };

        *self.write() = restored;
    }

    /// Sign in with an email and password.
    ///
    /// Flips the session to `Resolving`, waits the configured simulated
    /// latency, then checks the credentials. On success the profile
    /// becomes the active session and is persisted; a persistence failure
    /// is logged and absorbed, the in-memory session still activates. On
    /// failure the previous state is restored exactly.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the credentials are not
    /// accepted.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<UserProfile, AuthError> {
        let previous = {
            let mut state = self.write();
            std::mem::replace(&mut *state, SessionState::Resolving)
        };

        // Simulated network latency; no lock is held across this await.
        tokio::time::sleep(self.inner.login_delay).await;

        match self.inner.auth.verify(email, password) {
            Ok(profile) => {
                self.persist(&profile);
                *self.write() = SessionState::Active(profile.clone());
                debug!(user = %profile.id, "session active");
                Ok(profile)
            }
            Err(err) => {
                *self.write() = previous;
                Err(err)
            }
        }
    }

    /// Sign out.
    ///
    /// Unconditional and idempotent: the session becomes `Empty` and the
    /// persisted entry is removed whether or not anyone was signed in.
    /// A storage failure is logged and absorbed.
    pub fn logout(&self) {
        *self.write() = SessionState::Empty;
        if let Err(err) = self.inner.storage.remove(&self.inner.storage_key) {
            warn!(%err, "failed to remove persisted session");
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.read().phase()
    }

    /// Whether a user is signed in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.phase() == SessionPhase::Active
    }

    /// The signed-in profile, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<UserProfile> {
        match &*self.read() {
            SessionState::Active(profile) => Some(profile.clone()),
            _ => None,
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn persist(&self, profile: &UserProfile) {
        match serde_json::to_string(profile) {
            Ok(json) => {
                if let Err(err) = self.inner.storage.set(&self.inner.storage_key, &json) {
                    warn!(%err, "failed to persist session; continuing in memory");
                }
            }
            Err(err) => warn!(%err, "failed to serialize session profile"),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, SessionState> {
        self.inner.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.inner.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::directory::UserDirectory;
    use crate::sample;
    use crate::storage::{KeyValueStore, MemoryStore};

    fn store_with(storage: MemoryStore) -> SessionStore {
        let config = CrmConfig {
            login_delay: Duration::ZERO,
            ..CrmConfig::default()
        };
        let directory = Arc::new(UserDirectory::new(sample::users()));
        let auth = AuthService::new(directory, config.demo_password.clone());
        SessionStore::new(Arc::new(storage), auth, &config)
    }

    #[test]
    fn test_starts_uninitialized() {
        let session = store_with(MemoryStore::new());
        assert_eq!(session.phase(), SessionPhase::Uninitialized);
        assert!(!session.is_authenticated());
        assert!(session.current_user().is_none());
    }

    #[test]
    fn test_initialize_empty_storage() {
        let session = store_with(MemoryStore::new());
        session.initialize();
        assert_eq!(session.phase(), SessionPhase::Empty);
    }

    #[test]
    fn test_initialize_discards_malformed_entry() {
        let storage = MemoryStore::new();
        storage.set(keys::CURRENT_USER, "{not json").unwrap();

        let session = store_with(storage);
        session.initialize();
        assert_eq!(session.phase(), SessionPhase::Empty);
    }

    #[tokio::test]
    async fn test_authenticate_persists_profile() {
        let storage = MemoryStore::new();
        let session = store_with(storage.clone());
        session.initialize();

        let profile = session
            .authenticate("sarah.wilson@company.com", "demo123")
            .await
            .unwrap();
        assert_eq!(profile.name, "Sarah Wilson");
        assert!(session.is_authenticated());

        let persisted = storage.get(keys::CURRENT_USER).unwrap().unwrap();
        let stored: UserProfile = serde_json::from_str(&persisted).unwrap();
        assert_eq!(stored, profile);
    }

    #[tokio::test]
    async fn test_failed_sign_in_restores_previous_state() {
        let storage = MemoryStore::new();
        let session = store_with(storage.clone());
        session.initialize();

        let err = session
            .authenticate("sarah.wilson@company.com", "wrong")
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
        assert_eq!(session.phase(), SessionPhase::Empty);
        assert_eq!(storage.get(keys::CURRENT_USER).unwrap(), None);
    }

    #[tokio::test]
    async fn test_failed_sign_in_keeps_active_session() {
        let session = store_with(MemoryStore::new());
        session.initialize();
        session
            .authenticate("john.smith@company.com", "demo123")
            .await
            .unwrap();

        session
            .authenticate("sarah.wilson@company.com", "wrong")
            .await
            .unwrap_err();

        let user = session.current_user().unwrap();
        assert_eq!(user.name, "John Smith");
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let storage = MemoryStore::new();
        let session = store_with(storage.clone());
        session.initialize();
        session
            .authenticate("sarah.wilson@company.com", "demo123")
            .await
            .unwrap();

        session.logout();
        assert_eq!(session.phase(), SessionPhase::Empty);
        assert_eq!(storage.get(keys::CURRENT_USER).unwrap(), None);

        // Signing out while signed out is a no-op, not an error
        session.logout();
        assert_eq!(session.phase(), SessionPhase::Empty);
    }

    #[tokio::test]
    async fn test_reinitialize_restores_identity() {
        let storage = MemoryStore::new();

        let first = store_with(storage.clone());
        first.initialize();
        first
            .authenticate("random.person@anywhere.com", "demo123")
            .await
            .unwrap();

        // Same storage, fresh store: simulates an app restart
        let second = store_with(storage);
        second.initialize();
        let user = second.current_user().unwrap();
        assert_eq!(user.name, "Random Person");
        assert_eq!(user.id.as_str(), "demo");
    }

    #[test]
    fn test_phase_is_settling() {
        assert!(SessionPhase::Uninitialized.is_settling());
        assert!(SessionPhase::Resolving.is_settling());
        assert!(!SessionPhase::Empty.is_settling());
        assert!(!SessionPhase::Active.is_settling());
    }
}
