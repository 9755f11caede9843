//! Integration tests for Clementine.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p clementine-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `session_flow` - Session lifecycle and route guarding over shared storage
//! - `view_engines` - Screen state engines driven over the sample data set
//!
//! [`TestContext`] wires an [`AppState`] over a shared in-memory store with
//! zero simulated sign-in latency. Building a second context over the same
//! storage behaves like an app restart: whatever the first context
//! persisted is what the second one restores.
//!
//! Set `RUST_LOG` (e.g. `RUST_LOG=clementine_crm=debug`) to see the
//! instrumented session spans while a test runs.

use std::sync::Arc;
use std::time::Duration;

use clementine_crm::storage::MemoryStore;
use clementine_crm::{AppState, CrmConfig, SessionStore};

/// Shared setup for integration tests.
pub struct TestContext {
    pub state: AppState,
    pub storage: MemoryStore,
}

impl TestContext {
    /// Build a context over a fresh in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::over(MemoryStore::new())
    }

    /// Build a context over existing storage, simulating an app restart.
    #[must_use]
    pub fn over(storage: MemoryStore) -> Self {
        init_tracing();
        let config = CrmConfig {
            login_delay: Duration::ZERO,
            ..CrmConfig::default()
        };
        let state = AppState::new(config, Arc::new(storage.clone()));
        Self { state, storage }
    }

    /// The session store under test.
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        self.state.session()
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Install a `RUST_LOG`-driven subscriber, once per test binary.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
