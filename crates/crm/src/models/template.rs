//! Email template domain type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use clementine_core::TemplateId;

/// A reusable outbound email template.
///
/// `{{name}}`-style placeholders in the subject and body are filled in by
/// the composer at send time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmailTemplate {
    /// Unique template ID.
    pub id: TemplateId,
    /// Template name shown in the library.
    pub name: String,
    /// Subject line.
    pub subject: String,
    /// Body text.
    pub content: String,
    /// Library category (e.g., "Onboarding", "Sales").
    pub category: String,
    /// Display name of the author.
    pub created_by: String,
    /// When the template was created.
    pub created_at: NaiveDate,
    /// When the template was last sent.
    pub last_used: NaiveDate,
    /// How many times the template has been sent.
    pub usage_count: u32,
}
