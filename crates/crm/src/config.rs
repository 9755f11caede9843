//! CRM configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional; the defaults are the demo behavior:
//! - `CLEMENTINE_SESSION_KEY` - Storage key for the persisted session (default: `crm_user`)
//! - `CLEMENTINE_DEMO_PASSWORD` - Shared demo password (default: `demo123`)
//! - `CLEMENTINE_LOGIN_DELAY_MS` - Simulated sign-in latency in milliseconds (default: 1000)
//! - `CLEMENTINE_STORAGE_DIR` - Directory for the file-backed store (default: `.clementine`)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::sample;
use crate::session::keys;

/// Default simulated sign-in latency.
const DEFAULT_LOGIN_DELAY_MS: u64 = 1000;

/// Default directory for the file-backed store.
const DEFAULT_STORAGE_DIR: &str = ".clementine";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// CRM application configuration.
#[derive(Debug, Clone)]
pub struct CrmConfig {
    /// Storage key the signed-in profile is persisted under.
    pub session_key: String,
    /// The shared password accepted for every demo account.
    pub demo_password: String,
    /// Simulated sign-in latency. Tests set this to zero.
    pub login_delay: Duration,
    /// Directory used by the file-backed store.
    pub storage_dir: PathBuf,
}

impl Default for CrmConfig {
    fn default() -> Self {
        Self {
            session_key: keys::CURRENT_USER.to_owned(),
            demo_password: sample::DEMO_PASSWORD.to_owned(),
            login_delay: Duration::from_millis(DEFAULT_LOGIN_DELAY_MS),
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
        }
    }
}

impl CrmConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let login_delay_ms =
            get_millis_or_default("CLEMENTINE_LOGIN_DELAY_MS", DEFAULT_LOGIN_DELAY_MS)?;

        Ok(Self {
            session_key: get_env_or_default("CLEMENTINE_SESSION_KEY", keys::CURRENT_USER),
            demo_password: get_env_or_default("CLEMENTINE_DEMO_PASSWORD", sample::DEMO_PASSWORD),
            login_delay: Duration::from_millis(login_delay_ms),
            storage_dir: PathBuf::from(get_env_or_default(
                "CLEMENTINE_STORAGE_DIR",
                DEFAULT_STORAGE_DIR,
            )),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get a millisecond count from the environment, with a default.
fn get_millis_or_default(key: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        Err(_) => Ok(default),
    }
}
