//! Task domain type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use clementine_core::{LeadId, Priority, TaskId, TaskKind, TaskStatus};

/// A scheduled piece of work tied to a lead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique task ID.
    pub id: TaskId,
    /// Short title.
    pub title: String,
    /// What needs doing.
    pub description: String,
    /// Lead this task is about.
    pub lead_id: LeadId,
    /// Denormalized lead contact name for display.
    pub lead_name: String,
    /// Display name of the assigned rep.
    pub assignee: String,
    /// When the task is due.
    pub due_date: NaiveDate,
    /// Working priority.
    pub priority: Priority,
    /// Completion state.
    pub status: TaskStatus,
    /// What kind of work this is.
    #[serde(rename = "type")]
    pub kind: TaskKind,
}

impl Task {
    /// Whether the task is finished.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// Whether the task is past due and still open, relative to `today`.
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due_date < today && !self.is_completed()
    }

    /// Whether the task is due exactly on `today`.
    #[must_use]
    pub fn is_due_today(&self, today: NaiveDate) -> bool {
        self.due_date == today
    }

    /// Whether the task is open with a due date after `today`.
    #[must_use]
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.due_date > today && !self.is_completed()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn task_due(due: NaiveDate, status: TaskStatus) -> Task {
        Task {
            id: TaskId::new("T999"),
            title: "Follow-up call".to_owned(),
            description: String::new(),
            lead_id: LeadId::new("L001"),
            lead_name: "Sarah Johnson".to_owned(),
            assignee: "John Smith".to_owned(),
            due_date: due,
            priority: Priority::High,
            status,
            kind: TaskKind::Call,
        }
    }

    #[test]
    fn test_date_buckets() {
        let today = NaiveDate::from_ymd_opt(2024, 12, 11).unwrap();
        let yesterday = NaiveDate::from_ymd_opt(2024, 12, 10).unwrap();
        let tomorrow = NaiveDate::from_ymd_opt(2024, 12, 12).unwrap();

        let overdue = task_due(yesterday, TaskStatus::Pending);
        assert!(overdue.is_overdue(today));
        assert!(!overdue.is_due_today(today));
        assert!(!overdue.is_upcoming(today));

        let due_today = task_due(today, TaskStatus::Pending);
        assert!(due_today.is_due_today(today));
        assert!(!due_today.is_overdue(today));

        let upcoming = task_due(tomorrow, TaskStatus::InProgress);
        assert!(upcoming.is_upcoming(today));
        assert!(!upcoming.is_overdue(today));
    }

    #[test]
    fn test_completed_tasks_never_overdue_or_upcoming() {
        let today = NaiveDate::from_ymd_opt(2024, 12, 11).unwrap();
        let done = task_due(NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(), TaskStatus::Completed);
        assert!(done.is_completed());
        assert!(!done.is_overdue(today));
        assert!(!done.is_upcoming(today));
    }

    #[test]
    fn test_kind_serializes_as_type() {
        let task = task_due(
            NaiveDate::from_ymd_opt(2024, 12, 11).unwrap(),
            TaskStatus::Pending,
        );
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["type"], "call");
        assert_eq!(json["dueDate"], "2024-12-11");
        assert!(json.get("kind").is_none());
    }
}
