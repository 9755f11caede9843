//! Activity feed state: search, kind filter, and the day-grouped timeline.

use chrono::NaiveDate;

use clementine_core::ActivityKind;

use crate::models::Activity;

use super::matches_query;

/// State engine for the activity log screen.
///
/// The summary cards count each kind over the whole collection so they stay
/// stable while the search narrows the timeline below them.
#[derive(Debug, Clone)]
pub struct ActivityFeed {
    activities: Vec<Activity>,
    search: String,
    kind_filter: Option<ActivityKind>,
}

impl ActivityFeed {
    /// Create a feed over an owned activity collection.
    #[must_use]
    pub fn new(activities: Vec<Activity>) -> Self {
        Self {
            activities,
            search: String::new(),
            kind_filter: None,
        }
    }

    /// Set the search text.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// Set or clear the kind filter.
    pub fn set_kind_filter(&mut self, filter: Option<ActivityKind>) {
        self.kind_filter = filter;
    }

    /// Clicking a summary card filters to that kind; clicking it again
    /// clears the filter.
    pub fn toggle_kind_filter(&mut self, kind: ActivityKind) {
        self.kind_filter = if self.kind_filter == Some(kind) {
            None
        } else {
            Some(kind)
        };
    }

    /// The active kind filter.
    #[must_use]
    pub const fn kind_filter(&self) -> Option<ActivityKind> {
        self.kind_filter
    }

    /// All activities matching the search and kind filter, in collection
    /// order.
    ///
    /// The search matches the description, the lead contact name, or the
    /// acting user, case-insensitively.
    #[must_use]
    pub fn filtered(&self) -> Vec<&Activity> {
        let query = self.search.to_lowercase();
        self.activities
            .iter()
            .filter(|activity| {
                let matches_search = matches_query(&activity.description, &query)
                    || matches_query(&activity.lead_name, &query)
                    || matches_query(&activity.user, &query);
                let matches_kind = self.kind_filter.is_none_or(|kind| activity.kind == kind);
                matches_search && matches_kind
            })
            .collect()
    }

    /// The filtered timeline grouped by calendar day, newest day first and
    /// newest entry first within each day.
    #[must_use]
    pub fn grouped_by_day(&self) -> Vec<(NaiveDate, Vec<&Activity>)> {
        let mut entries = self.filtered();
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        let mut days: Vec<(NaiveDate, Vec<&Activity>)> = Vec::new();
        for activity in entries {
            let day = activity.timestamp.date();
            match days.last_mut() {
                Some((current, bucket)) if *current == day => bucket.push(activity),
                _ => days.push((day, vec![activity])),
            }
        }
        days
    }

    /// Count of each kind over the full collection, in summary card order.
    #[must_use]
    pub fn kind_counts(&self) -> Vec<(ActivityKind, usize)> {
        ActivityKind::ALL
            .into_iter()
            .map(|kind| {
                let count = self
                    .activities
                    .iter()
                    .filter(|activity| activity.kind == kind)
                    .count();
                (kind, count)
            })
            .collect()
    }
}
