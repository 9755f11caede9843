//! Domain records for the CRM.
//!
//! These are plain data types with serde support. Wire spellings are
//! camelCase to match the persisted data shapes.

pub mod activity;
pub mod lead;
pub mod opportunity;
pub mod reports;
pub mod task;
pub mod template;
pub mod user;

pub use activity::Activity;
pub use lead::Lead;
pub use opportunity::Opportunity;
pub use reports::{
    DashboardMetrics, FunnelStage, LeadSourceShare, MonthlyPerformance, TeamMemberStats,
};
pub use task::Task;
pub use template::EmailTemplate;
pub use user::{PerformanceSnapshot, UserProfile};
