//! Status enums for CRM records.
//!
//! Wire spellings are kebab-case to match the persisted data shapes
//! (`"closed-won"`, `"sales-rep"`, `"task-completed"`).

use serde::{Deserialize, Serialize};

/// Where a lead sits in the qualification funnel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LeadStatus {
    #[default]
    New,
    Cold,
    Engaged,
    Opportunity,
    Won,
    Lost,
}

/// Priority level shared by leads and tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

/// Sales pipeline stage for opportunities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PipelineStage {
    #[default]
    Qualification,
    Proposal,
    Negotiation,
    ClosedWon,
    ClosedLost,
}

impl PipelineStage {
    /// Board column order, left to right.
    pub const ALL: [Self; 5] = [
        Self::Qualification,
        Self::Proposal,
        Self::Negotiation,
        Self::ClosedWon,
        Self::ClosedLost,
    ];

    /// Human-readable column header.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Qualification => "Qualification",
            Self::Proposal => "Proposal",
            Self::Negotiation => "Negotiation",
            Self::ClosedWon => "Closed Won",
            Self::ClosedLost => "Closed Lost",
        }
    }
}

/// Completion state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Overdue,
}

/// What kind of work a task represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskKind {
    Call,
    Email,
    Meeting,
    FollowUp,
    Demo,
}

/// What kind of touchpoint an activity records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityKind {
    Call,
    Email,
    Meeting,
    Note,
    TaskCompleted,
}

impl ActivityKind {
    /// Summary card order on the activity feed.
    pub const ALL: [Self; 5] = [
        Self::Call,
        Self::Email,
        Self::Meeting,
        Self::Note,
        Self::TaskCompleted,
    ];

    /// Human-readable label for feed cards.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Call => "Phone Call",
            Self::Email => "Email",
            Self::Meeting => "Meeting",
            Self::Note => "Note",
            Self::TaskCompleted => "Task Completed",
        }
    }
}

/// Account role with different permission levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// Full access including user management.
    Admin,
    /// Team oversight: dashboards, reassignment, reporting.
    Manager,
    /// Works an individual book of leads; the default for demo sign-ins.
    #[default]
    SalesRep,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Manager => write!(f, "manager"),
            Self::SalesRep => write!(f, "sales-rep"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "manager" => Ok(Self::Manager),
            "sales-rep" => Ok(Self::SalesRep),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}
