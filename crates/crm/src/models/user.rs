//! User account domain types.
//!
//! [`UserProfile`] is what the session persists: the signed-in identity
//! plus the performance counters shown on the dashboard.

use serde::{Deserialize, Serialize};

use clementine_core::{Email, Money, UserId};

// Re-export Role from core for convenience
pub use clementine_core::Role;

/// A CRM user account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Sign-in email address.
    pub email: Email,
    /// Permission level.
    pub role: Role,
    /// Two-character initials shown in the avatar badge.
    pub avatar: String,
    /// Department name.
    pub department: String,
    /// Lifetime performance counters.
    pub performance: PerformanceSnapshot,
}

/// Performance counters attached to a user account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSnapshot {
    /// Leads currently assigned.
    pub leads_assigned: u32,
    /// Deals closed won.
    pub deals_won: u32,
    /// Revenue attributed to this user.
    pub revenue: Money,
    /// Tasks completed.
    pub tasks_completed: u32,
}
