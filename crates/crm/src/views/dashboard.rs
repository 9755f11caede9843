//! Dashboard state: topline metrics, report series, and the two widgets.

use crate::models::{
    Activity, DashboardMetrics, FunnelStage, LeadSourceShare, MonthlyPerformance, Task,
    TeamMemberStats,
};
use crate::sample;

/// Number of rows each dashboard widget shows.
const WIDGET_SIZE: usize = 5;

/// State for the landing screen: header cards, report charts, and the
/// recent-activity and upcoming-task widgets.
#[derive(Debug, Clone)]
pub struct DashboardView {
    metrics: DashboardMetrics,
    funnel: Vec<FunnelStage>,
    monthly: Vec<MonthlyPerformance>,
    sources: Vec<LeadSourceShare>,
    team: Vec<TeamMemberStats>,
    activities: Vec<Activity>,
    tasks: Vec<Task>,
}

impl DashboardView {
    /// Assemble a dashboard from its parts.
    #[must_use]
    pub const fn new(
        metrics: DashboardMetrics,
        funnel: Vec<FunnelStage>,
        monthly: Vec<MonthlyPerformance>,
        sources: Vec<LeadSourceShare>,
        team: Vec<TeamMemberStats>,
        activities: Vec<Activity>,
        tasks: Vec<Task>,
    ) -> Self {
        Self {
            metrics,
            funnel,
            monthly,
            sources,
            team,
            activities,
            tasks,
        }
    }

    /// The demo dashboard over the full sample data set.
    #[must_use]
    pub fn from_sample() -> Self {
        Self::new(
            sample::dashboard_metrics(),
            sample::funnel(),
            sample::monthly_performance(),
            sample::lead_sources(),
            sample::team_performance(),
            sample::activities(),
            sample::tasks(),
        )
    }

    /// Topline numbers for the header cards.
    #[must_use]
    pub const fn metrics(&self) -> &DashboardMetrics {
        &self.metrics
    }

    /// Funnel chart rows, widest stage first.
    #[must_use]
    pub fn funnel(&self) -> &[FunnelStage] {
        &self.funnel
    }

    /// Monthly performance trend rows, oldest month first.
    #[must_use]
    pub fn monthly_performance(&self) -> &[MonthlyPerformance] {
        &self.monthly
    }

    /// Lead-source breakdown rows.
    #[must_use]
    pub fn lead_sources(&self) -> &[LeadSourceShare] {
        &self.sources
    }

    /// Team leaderboard rows.
    #[must_use]
    pub fn team_performance(&self) -> &[TeamMemberStats] {
        &self.team
    }

    /// The first five activities, in collection order.
    #[must_use]
    pub fn recent_activities(&self) -> Vec<&Activity> {
        self.activities.iter().take(WIDGET_SIZE).collect()
    }

    /// The first five tasks that are not completed, in collection order.
    #[must_use]
    pub fn upcoming_tasks(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| !task.is_completed())
            .take(WIDGET_SIZE)
            .collect()
    }
}
