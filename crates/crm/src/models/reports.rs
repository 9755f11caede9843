//! Dashboard and reporting row types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use clementine_core::Money;

/// Topline numbers for the dashboard header cards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_leads: u32,
    pub new_leads_this_month: u32,
    pub active_opportunities: u32,
    pub total_revenue: Money,
    pub revenue_target: Money,
    /// Lead-to-deal conversion rate, percent.
    pub conversion_rate: Decimal,
    pub avg_deal_size: Money,
    pub tasks_completed: u32,
    pub tasks_pending: u32,
    pub activities_this_week: u32,
}

/// One bar of the funnel chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FunnelStage {
    /// Chart label (e.g., "New Leads", "Qualified").
    pub stage: String,
    pub count: u32,
    pub value: Money,
}

/// One month of the performance trend chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPerformance {
    /// Three-letter month label.
    pub month: String,
    pub leads: u32,
    pub deals: u32,
    pub revenue: Money,
}

/// One slice of the lead-sources breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LeadSourceShare {
    pub source: String,
    pub count: u32,
    /// Share of all leads, percent.
    pub percentage: u8,
}

/// One row of the team leaderboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberStats {
    pub name: String,
    pub deals: u32,
    pub revenue: Money,
    pub target: Money,
}

impl TeamMemberStats {
    /// Revenue as a percentage of target, or zero when no target is set.
    #[must_use]
    pub fn target_attainment(&self) -> Decimal {
        if self.target.is_zero() {
            return Decimal::ZERO;
        }
        self.revenue.amount() * Decimal::ONE_HUNDRED / self.target.amount()
    }
}
