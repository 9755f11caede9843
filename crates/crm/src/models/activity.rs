//! Activity feed domain type.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use clementine_core::{ActivityId, ActivityKind, LeadId};

/// A logged touchpoint with a lead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Unique activity ID.
    pub id: ActivityId,
    /// What kind of touchpoint this was.
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    /// Lead this activity is about.
    pub lead_id: LeadId,
    /// Denormalized lead contact name for display.
    pub lead_name: String,
    /// What happened.
    pub description: String,
    /// Display name of the rep who logged it.
    pub user: String,
    /// When it happened (local wall-clock time).
    pub timestamp: NaiveDateTime,
    /// Optional outcome note (e.g., "Demo successful").
    pub outcome: Option<String>,
}
