//! Sign-in credential checking.
//!
//! Demo semantics: every account shares one password. A cataloged email
//! signs in as that account; an unknown email with the shared password
//! gets a profile synthesized on the fly, so any visitor can explore the
//! demo under their own name.

mod error;

pub use error::AuthError;

use std::sync::Arc;

use tracing::debug;

use clementine_core::{Email, Money, Role, UserId};

use crate::directory::UserDirectory;
use crate::models::{PerformanceSnapshot, UserProfile};

/// ID shared by all synthesized demo profiles.
const DEMO_USER_ID: &str = "demo";

/// Department assigned to synthesized demo profiles.
const DEMO_DEPARTMENT: &str = "Sales";

/// Sign-in credential checker.
///
/// Holds the user catalog and the shared demo password. Stateless beyond
/// that; every call to [`verify`](Self::verify) is independent.
#[derive(Debug, Clone)]
pub struct AuthService {
    directory: Arc<UserDirectory>,
    password: String,
}

impl AuthService {
    /// Create an authentication service over a user catalog.
    #[must_use]
    pub fn new(directory: Arc<UserDirectory>, password: impl Into<String>) -> Self {
        Self {
            directory,
            password: password.into(),
        }
    }

    /// Check a sign-in attempt and resolve the profile it signs in as.
    ///
    /// The password must equal the shared demo password. If the email is
    /// in the catalog (matched ignoring case) the catalog record is
    /// returned unchanged; otherwise a demo profile is synthesized from
    /// the email itself.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` for a malformed email or a
    /// wrong password. The caller cannot distinguish the two.
    pub fn verify(&self, email: &str, password: &str) -> Result<UserProfile, AuthError> {
        let email = Email::parse(email).map_err(|err| {
            debug!(%err, "sign-in rejected: malformed email");
            AuthError::InvalidCredentials
        })?;

        if password != self.password {
            debug!(email = %email, "sign-in rejected: wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        if let Some(profile) = self.directory.find_by_email(&email) {
            debug!(user = %profile.id, "sign-in matched catalog account");
            return Ok(profile.clone());
        }

        debug!(email = %email, "sign-in synthesized a demo profile");
        Ok(synthesize_profile(&email))
    }
}

/// Build a demo profile for an email that is not in the catalog.
fn synthesize_profile(email: &Email) -> UserProfile {
    let avatar: String = email.as_str().chars().take(2).collect::<String>().to_uppercase();

    UserProfile {
        id: UserId::new(DEMO_USER_ID),
        name: display_name(email),
        email: email.clone(),
        role: Role::default(),
        avatar,
        department: DEMO_DEPARTMENT.to_owned(),
        performance: PerformanceSnapshot {
            leads_assigned: 25,
            deals_won: 5,
            revenue: Money::from_dollars(150_000),
            tasks_completed: 45,
        },
    }
}

/// Derive a display name from the email's local part: dots become spaces
/// and each segment is capitalized (`jane.doe` becomes `Jane Doe`).
fn display_name(email: &Email) -> String {
    email
        .local_part()
        .split('.')
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
    })
}
