//! Task list state: search, date-bucket tabs, completion toggling, and
//! optimistic task mutations.

use chrono::NaiveDate;

use clementine_core::{TaskId, TaskStatus};

use crate::models::Task;

use super::{Notice, matches_query};

/// Which slice of the task list is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskTab {
    #[default]
    All,
    /// Due exactly on the reference date, completed or not.
    Today,
    /// Open tasks due after the reference date.
    Upcoming,
    /// Open tasks due before the reference date.
    Overdue,
    Completed,
}

/// State engine for the tasks screen.
///
/// Date buckets are evaluated against an injected reference date rather
/// than the wall clock, so the same task list partitions identically in
/// tests and across midnight.
#[derive(Debug, Clone)]
pub struct TasksView {
    tasks: Vec<Task>,
    search: String,
    tab: TaskTab,
    today: NaiveDate,
}

impl TasksView {
    /// Create a view over an owned task collection, evaluated against
    /// `today`.
    #[must_use]
    pub fn new(tasks: Vec<Task>, today: NaiveDate) -> Self {
        Self {
            tasks,
            search: String::new(),
            tab: TaskTab::default(),
            today,
        }
    }

    /// Set the search text.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// Switch tabs.
    pub fn set_tab(&mut self, tab: TaskTab) {
        self.tab = tab;
    }

    /// The active tab.
    #[must_use]
    pub const fn tab(&self) -> TaskTab {
        self.tab
    }

    /// Tasks matching the search and the active tab, in collection order.
    ///
    /// The search matches the title or the lead contact name,
    /// case-insensitively.
    #[must_use]
    pub fn filtered(&self) -> Vec<&Task> {
        let query = self.search.to_lowercase();
        self.tasks
            .iter()
            .filter(|task| {
                let matches_search =
                    matches_query(&task.title, &query) || matches_query(&task.lead_name, &query);
                let matches_tab = match self.tab {
                    TaskTab::All => true,
                    TaskTab::Today => task.is_due_today(self.today),
                    TaskTab::Upcoming => task.is_upcoming(self.today),
                    TaskTab::Overdue => task.is_overdue(self.today),
                    TaskTab::Completed => task.is_completed(),
                };
                matches_search && matches_tab
            })
            .collect()
    }

    // ====== Header counts ======

    /// Total number of tasks, regardless of search or tab.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Tasks currently in the pending state (in-progress not included).
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.tasks
            .iter()
            .filter(|task| task.status == TaskStatus::Pending)
            .count()
    }

    /// Open tasks past their due date.
    #[must_use]
    pub fn overdue_count(&self) -> usize {
        self.tasks
            .iter()
            .filter(|task| task.is_overdue(self.today))
            .count()
    }

    /// Completed tasks.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_completed()).count()
    }

    // ====== Mutations ======

    /// Flip a task between completed and pending. Returns `None` when no
    /// task has that ID.
    pub fn toggle_completed(&mut self, id: &TaskId) -> Option<Notice> {
        let task = self.find_mut(id)?;
        task.status = if task.is_completed() {
            TaskStatus::Pending
        } else {
            TaskStatus::Completed
        };
        Some(Notice::success("Task updated"))
    }

    /// Add a new task to the list.
    pub fn create(&mut self, task: Task) -> Notice {
        self.tasks.push(task);
        Notice::success("Task created")
    }

    /// Replace an existing task, matched by ID. Returns `None` when no task
    /// has that ID.
    pub fn update(&mut self, task: Task) -> Option<Notice> {
        let slot = self.find_mut(&task.id)?;
        *slot = task;
        Some(Notice::success("Task updated"))
    }

    /// Move a task's due date. Returns `None` when no task has that ID.
    pub fn reschedule(&mut self, id: &TaskId, due_date: NaiveDate) -> Option<Notice> {
        let task = self.find_mut(id)?;
        task.due_date = due_date;
        Some(Notice::success("Task rescheduled"))
    }

    /// Hand a task to a different assignee. Returns `None` when no task has
    /// that ID.
    pub fn reassign(&mut self, id: &TaskId, assignee: impl Into<String>) -> Option<Notice> {
        let task = self.find_mut(id)?;
        task.assignee = assignee.into();
        Some(Notice::success("Task reassigned"))
    }

    /// Remove a task from the list. Returns `None` when no task has that ID.
    pub fn remove(&mut self, id: &TaskId) -> Option<Notice> {
        let position = self.tasks.iter().position(|task| &task.id == id)?;
        self.tasks.remove(position);
        Some(Notice::success("Task deleted"))
    }

    fn find_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| &task.id == id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::sample;

    // The seeded due dates span 2024-12-10 through 2024-12-15.
    fn reference_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 11).unwrap()
    }

    fn view() -> TasksView {
        TasksView::new(sample::tasks(), reference_date())
    }

    #[test]
    fn test_tab_partitions() {
        let mut view = view();
        assert_eq!(view.filtered().len(), 8);

        // T001 and T005 are due on the reference date.
        view.set_tab(TaskTab::Today);
        let ids: Vec<_> = view.filtered().iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids.len(), 2);

        view.set_tab(TaskTab::Upcoming);
        assert_eq!(view.filtered().len(), 5);

        // T006 is due 2024-12-10 but completed, so nothing is overdue.
        view.set_tab(TaskTab::Overdue);
        assert!(view.filtered().is_empty());

        view.set_tab(TaskTab::Completed);
        assert_eq!(view.filtered().len(), 1);
    }

    #[test]
    fn test_later_reference_date_shifts_buckets() {
        let mut view = TasksView::new(
            sample::tasks(),
            NaiveDate::from_ymd_opt(2024, 12, 13).unwrap(),
        );

        view.set_tab(TaskTab::Overdue);
        assert_eq!(view.filtered().len(), 4);
        assert_eq!(view.overdue_count(), 4);

        view.set_tab(TaskTab::Upcoming);
        assert_eq!(view.filtered().len(), 2);
    }

    #[test]
    fn test_search_combines_with_tab() {
        let mut view = view();
        view.set_search("healthplus");
        assert_eq!(view.filtered().len(), 1);

        view.set_tab(TaskTab::Today);
        assert_eq!(view.filtered().len(), 1);

        view.set_tab(TaskTab::Completed);
        assert!(view.filtered().is_empty());
    }

    #[test]
    fn test_header_counts() {
        let view = view();
        assert_eq!(view.len(), 8);
        // T002 is in progress, so it counts as neither pending nor completed.
        assert_eq!(view.pending_count(), 6);
        assert_eq!(view.completed_count(), 1);
        assert_eq!(view.overdue_count(), 0);
    }

    #[test]
    fn test_toggle_completed_both_directions() {
        let mut view = view();
        let id = TaskId::new("T001");

        let notice = view.toggle_completed(&id).unwrap();
        assert_eq!(notice.message, "Task updated");
        assert_eq!(view.completed_count(), 2);

        view.toggle_completed(&id).unwrap();
        assert_eq!(view.completed_count(), 1);
        assert_eq!(view.pending_count(), 6);

        assert!(view.toggle_completed(&TaskId::new("T999")).is_none());
    }

    #[test]
    fn test_toggle_marks_in_progress_tasks_completed() {
        let mut view = view();
        view.toggle_completed(&TaskId::new("T002")).unwrap();
        assert_eq!(view.completed_count(), 2);
    }

    #[test]
    fn test_reschedule_moves_between_buckets() {
        let mut view = view();
        view.set_tab(TaskTab::Overdue);
        assert!(view.filtered().is_empty());

        let notice = view
            .reschedule(
                &TaskId::new("T003"),
                NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
            )
            .unwrap();
        assert_eq!(notice.message, "Task rescheduled");
        assert_eq!(view.filtered().len(), 1);
        assert_eq!(view.overdue_count(), 1);
    }

    #[test]
    fn test_reassign_and_remove() {
        let mut view = view();

        let notice = view
            .reassign(&TaskId::new("T004"), "Emily Davis")
            .unwrap();
        assert_eq!(notice.message, "Task reassigned");

        let reassigned = view
            .filtered()
            .into_iter()
            .find(|t| t.id == TaskId::new("T004"))
            .unwrap();
        assert_eq!(reassigned.assignee, "Emily Davis");

        let notice = view.remove(&TaskId::new("T004")).unwrap();
        assert_eq!(notice.message, "Task deleted");
        assert_eq!(view.len(), 7);
        assert!(view.remove(&TaskId::new("T004")).is_none());
    }

    #[test]
    fn test_create_appends() {
        let mut view = view();
        let mut task = sample::tasks().into_iter().next().unwrap();
        task.id = TaskId::new("T009");
        task.title = "Send pricing sheet".to_owned();

        let notice = view.create(task);
        assert_eq!(notice.message, "Task created");
        assert_eq!(view.len(), 9);
    }
}
