//! Per-screen state engines.
//!
//! Each view owns its collection plus the local UI state of one screen
//! (search text, filters, paging, selection) and exposes the derived rows a
//! renderer would display. Mutations are optimistic local updates: they
//! touch the owned collection only and return a [`Notice`] for the caller
//! to surface. Nothing here persists.

pub mod activity;
pub mod dashboard;
pub mod leads;
pub mod pipeline;
pub mod tasks;
pub mod templates;

pub use activity::ActivityFeed;
pub use dashboard::DashboardView;
pub use leads::LeadsView;
pub use pipeline::PipelineView;
pub use tasks::{TaskTab, TasksView};
pub use templates::TemplatesView;

use serde::{Deserialize, Serialize};

/// Feedback payload produced by a view mutation, rendered as a toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Visual treatment.
    pub kind: NoticeKind,
    /// User-facing message.
    pub message: String,
}

/// How a [`Notice`] should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NoticeKind {
    Success,
    Error,
}

impl Notice {
    /// A success notice.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    /// An error notice.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Case-insensitive substring match used by every view's search box.
fn matches_query(haystack: &str, query: &str) -> bool {
    haystack.to_lowercase().contains(query)
}
