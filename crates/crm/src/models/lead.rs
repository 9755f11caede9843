//! Lead domain type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use clementine_core::{Email, LeadId, LeadStatus, Money, Priority};

/// A sales lead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    /// Unique lead ID.
    pub id: LeadId,
    /// Contact's full name.
    pub name: String,
    /// Contact's email address.
    pub email: Email,
    /// Contact's phone number.
    pub phone: String,
    /// Company the contact works for.
    pub company: String,
    /// Funnel status.
    pub status: LeadStatus,
    /// Working priority.
    pub priority: Priority,
    /// Display name of the rep who owns this lead.
    pub owner: String,
    /// When the lead entered the system.
    pub created_at: NaiveDate,
    /// Date of the most recent touchpoint.
    pub last_activity: NaiveDate,
    /// Where the lead came from (e.g., "Website", "Referral").
    pub source: String,
    /// Contact's industry.
    pub industry: String,
    /// Estimated deal value.
    pub deal_value: Money,
    /// Free-form labels.
    pub tags: Vec<String>,
}
