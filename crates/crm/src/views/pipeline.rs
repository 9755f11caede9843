//! Opportunity board state: search, stage grouping, pipeline totals, and
//! optimistic create/update/delete.

use clementine_core::{Money, OpportunityId, PipelineStage};

use crate::models::Opportunity;

use super::{Notice, matches_query};

/// State engine for the opportunities screen.
///
/// The board groups the filtered deals into the five pipeline stages; the
/// header cards show the total and probability-weighted value of whatever
/// the search currently matches.
#[derive(Debug, Clone)]
pub struct PipelineView {
    opportunities: Vec<Opportunity>,
    search: String,
}

impl PipelineView {
    /// Create a view over an owned opportunity collection.
    #[must_use]
    pub fn new(opportunities: Vec<Opportunity>) -> Self {
        Self {
            opportunities,
            search: String::new(),
        }
    }

    /// Set the search text.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// All deals matching the search, in collection order.
    ///
    /// The search matches the deal name or the lead contact name,
    /// case-insensitively.
    #[must_use]
    pub fn filtered(&self) -> Vec<&Opportunity> {
        let query = self.search.to_lowercase();
        self.opportunities
            .iter()
            .filter(|opp| {
                matches_query(&opp.name, &query) || matches_query(&opp.lead_name, &query)
            })
            .collect()
    }

    // ====== Board columns ======

    /// Filtered deals in one stage, in collection order.
    #[must_use]
    pub fn stage_items(&self, stage: PipelineStage) -> Vec<&Opportunity> {
        self.filtered()
            .into_iter()
            .filter(|opp| opp.stage == stage)
            .collect()
    }

    /// Combined value of the filtered deals in one stage.
    #[must_use]
    pub fn stage_value(&self, stage: PipelineStage) -> Money {
        self.stage_items(stage).iter().map(|opp| opp.value).sum()
    }

    /// Combined value of every filtered deal.
    #[must_use]
    pub fn total_value(&self) -> Money {
        self.filtered().iter().map(|opp| opp.value).sum()
    }

    /// Probability-weighted value of every filtered deal.
    #[must_use]
    pub fn weighted_value(&self) -> Money {
        self.filtered().iter().map(|opp| opp.weighted_value()).sum()
    }

    // ====== Mutations ======

    /// Add a new deal to the board.
    pub fn create(&mut self, opportunity: Opportunity) -> Notice {
        self.opportunities.push(opportunity);
        Notice::success("Opportunity created")
    }

    /// Replace an existing deal, matched by ID. Returns `None` when no deal
    /// has that ID.
    pub fn update(&mut self, opportunity: Opportunity) -> Option<Notice> {
        let slot = self
            .opportunities
            .iter_mut()
            .find(|existing| existing.id == opportunity.id)?;
        *slot = opportunity;
        Some(Notice::success("Opportunity updated"))
    }

    /// Remove a deal from the board. Returns `None` when no deal has that ID.
    pub fn remove(&mut self, id: &OpportunityId) -> Option<Notice> {
        let position = self
            .opportunities
            .iter()
            .position(|existing| &existing.id == id)?;
        self.opportunities.remove(position);
        Some(Notice::success("Opportunity deleted"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::sample;
    use chrono::NaiveDate;
    use clementine_core::LeadId;

    fn view() -> PipelineView {
        PipelineView::new(sample::opportunities())
    }

    #[test]
    fn test_stage_grouping() {
        let view = view();
        assert_eq!(view.stage_items(PipelineStage::Negotiation).len(), 2);
        assert_eq!(view.stage_items(PipelineStage::Proposal).len(), 2);
        assert_eq!(view.stage_items(PipelineStage::Qualification).len(), 1);
        assert_eq!(view.stage_items(PipelineStage::ClosedWon).len(), 1);
        assert!(view.stage_items(PipelineStage::ClosedLost).is_empty());
    }

    #[test]
    fn test_stage_and_total_values() {
        let view = view();
        // OPP001 ($85k) + OPP006 ($110k) are in negotiation.
        assert_eq!(
            view.stage_value(PipelineStage::Negotiation),
            Money::from_dollars(195_000)
        );
        assert_eq!(view.total_value(), Money::from_dollars(625_000));
    }

    #[test]
    fn test_weighted_value() {
        let view = view();
        // 85k*75% + 120k*60% + 95k*40% + 150k*100% + 65k*55% + 110k*70%
        assert_eq!(view.weighted_value(), Money::from_dollars(436_500));
    }

    #[test]
    fn test_search_narrows_totals() {
        let mut view = view();
        view.set_search("techcorp");
        assert_eq!(view.filtered().len(), 1);
        assert_eq!(view.total_value(), Money::from_dollars(85_000));
        assert_eq!(view.weighted_value(), Money::from_dollars(63_750));

        view.set_search("sarah johnson");
        assert_eq!(view.filtered().len(), 1);
    }

    #[test]
    fn test_create_update_remove() {
        let mut view = view();

        let notice = view.create(Opportunity {
            id: OpportunityId::new("OPP007"),
            name: "ConstructCo Platform".to_owned(),
            lead_id: LeadId::new("L008"),
            lead_name: "James Anderson".to_owned(),
            stage: PipelineStage::Qualification,
            value: Money::from_dollars(78_000),
            probability: 30,
            owner: "Emily Davis".to_owned(),
            expected_close_date: NaiveDate::from_ymd_opt(2025, 2, 15).unwrap(),
            created_at: NaiveDate::from_ymd_opt(2024, 12, 11).unwrap(),
            products: vec!["Construction Suite".to_owned()],
            notes: String::new(),
        });
        assert_eq!(notice.message, "Opportunity created");
        assert_eq!(view.filtered().len(), 7);

        let mut edited = view.filtered().last().copied().unwrap().clone();
        edited.stage = PipelineStage::Proposal;
        let notice = view.update(edited).unwrap();
        assert_eq!(notice.message, "Opportunity updated");
        assert_eq!(view.stage_items(PipelineStage::Proposal).len(), 3);

        let notice = view.remove(&OpportunityId::new("OPP007")).unwrap();
        assert_eq!(notice.message, "Opportunity deleted");
        assert_eq!(view.filtered().len(), 6);

        assert!(view.remove(&OpportunityId::new("OPP007")).is_none());
    }
}
