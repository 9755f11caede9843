//! Read-only user catalog.

use std::collections::HashMap;

use clementine_core::Email;

use crate::models::UserProfile;

/// The known user accounts, indexed for case-insensitive email lookup.
///
/// Built once at startup from the seeded catalog and never mutated;
/// sign-in only reads from it.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    by_email: HashMap<String, UserProfile>,
}

impl UserDirectory {
    /// Build a directory from a set of profiles.
    ///
    /// Profiles with the same email (ignoring case) collapse to the last
    /// one given.
    #[must_use]
    pub fn new(profiles: impl IntoIterator<Item = UserProfile>) -> Self {
        let by_email = profiles
            .into_iter()
            .map(|profile| (profile.email.normalized(), profile))
            .collect();
        Self { by_email }
    }

    /// Look up an account by email, ignoring case.
    #[must_use]
    pub fn find_by_email(&self, email: &Email) -> Option<&UserProfile> {
        self.by_email.get(&email.normalized())
    }

    /// Number of accounts in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_email.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_email.is_empty()
    }
}
