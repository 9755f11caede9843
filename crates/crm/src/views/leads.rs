//! Lead table state: search, status filter, pagination, row selection.

use clementine_core::{LeadId, LeadStatus};

use crate::models::Lead;

use super::matches_query;

/// Rows shown per page of the lead table.
pub const PAGE_SIZE: usize = 8;

/// State engine for the lead management screen.
///
/// Paging is 1-based and clamped to the filtered result set; changing the
/// search text or status filter snaps back to the first page so the view
/// never points past the end of a shrunken result list.
#[derive(Debug, Clone)]
pub struct LeadsView {
    leads: Vec<Lead>,
    search: String,
    status_filter: Option<LeadStatus>,
    page: usize,
    selected: Vec<LeadId>,
}

impl LeadsView {
    /// Create a view over an owned lead collection, showing page 1 unfiltered.
    #[must_use]
    pub fn new(leads: Vec<Lead>) -> Self {
        Self {
            leads,
            search: String::new(),
            status_filter: None,
            page: 1,
            selected: Vec::new(),
        }
    }

    // ====== Filtering ======

    /// Set the search text and reset to the first page.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
        self.page = 1;
    }

    /// Set or clear the status filter and reset to the first page.
    pub fn set_status_filter(&mut self, filter: Option<LeadStatus>) {
        self.status_filter = filter;
        self.page = 1;
    }

    /// All leads matching the current search and status filter, in
    /// collection order.
    ///
    /// The search matches name, company, or email, case-insensitively.
    #[must_use]
    pub fn filtered(&self) -> Vec<&Lead> {
        let query = self.search.to_lowercase();
        self.leads
            .iter()
            .filter(|lead| {
                let matches_search = matches_query(&lead.name, &query)
                    || matches_query(&lead.company, &query)
                    || matches_query(lead.email.as_str(), &query);
                let matches_status = self
                    .status_filter
                    .is_none_or(|status| lead.status == status);
                matches_search && matches_status
            })
            .collect()
    }

    // ====== Paging ======

    /// Current 1-based page number.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Number of pages for the current filter; at least 1 even when empty.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.filtered().len().div_ceil(PAGE_SIZE).max(1)
    }

    /// Jump to a page, clamped to `1..=page_count`.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.page_count());
    }

    /// Advance one page, stopping at the last.
    pub fn next_page(&mut self) {
        self.set_page(self.page + 1);
    }

    /// Go back one page, stopping at the first.
    pub fn prev_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    /// The filtered rows on the current page.
    #[must_use]
    pub fn visible(&self) -> Vec<&Lead> {
        self.filtered()
            .into_iter()
            .skip((self.page - 1) * PAGE_SIZE)
            .take(PAGE_SIZE)
            .collect()
    }

    // ====== Selection ======

    /// IDs of the currently selected rows.
    #[must_use]
    pub fn selected(&self) -> &[LeadId] {
        &self.selected
    }

    /// Whether a row is selected.
    #[must_use]
    pub fn is_selected(&self, id: &LeadId) -> bool {
        self.selected.contains(id)
    }

    /// Toggle one row in or out of the selection.
    pub fn toggle_select(&mut self, id: &LeadId) {
        if let Some(position) = self.selected.iter().position(|selected| selected == id) {
            self.selected.remove(position);
        } else {
            self.selected.push(id.clone());
        }
    }

    /// Toggle the visible page: deselect it if every visible row is already
    /// selected, otherwise select every visible row.
    pub fn toggle_select_all(&mut self) {
        let visible_ids: Vec<LeadId> = self.visible().iter().map(|lead| lead.id.clone()).collect();
        if visible_ids.iter().all(|id| self.selected.contains(id)) {
            self.selected.retain(|id| !visible_ids.contains(id));
        } else {
            for id in visible_ids {
                if !self.selected.contains(&id) {
                    self.selected.push(id);
                }
            }
        }
    }
}
