//! Opportunity domain type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use clementine_core::{LeadId, Money, OpportunityId, PipelineStage};

/// A deal in the sales pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    /// Unique opportunity ID.
    pub id: OpportunityId,
    /// Deal name (e.g., "TechCorp Enterprise License").
    pub name: String,
    /// Lead this deal originated from.
    pub lead_id: LeadId,
    /// Denormalized lead contact name for display.
    pub lead_name: String,
    /// Current pipeline stage.
    pub stage: PipelineStage,
    /// Deal value.
    pub value: Money,
    /// Win probability, 0-100.
    pub probability: u8,
    /// Display name of the rep who owns this deal.
    pub owner: String,
    /// Forecast close date.
    pub expected_close_date: NaiveDate,
    /// When the opportunity was opened.
    pub created_at: NaiveDate,
    /// Products attached to the deal.
    pub products: Vec<String>,
    /// Free-form notes.
    pub notes: String,
}

impl Opportunity {
    /// Probability-weighted deal value.
    #[must_use]
    pub fn weighted_value(&self) -> Money {
        self.value.percent_of(self.probability)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn deal(value: i64, probability: u8) -> Opportunity {
        Opportunity {
            id: OpportunityId::new("OPP999"),
            name: "Test Deal".to_owned(),
            lead_id: LeadId::new("L999"),
            lead_name: "Test Contact".to_owned(),
            stage: PipelineStage::Proposal,
            value: Money::from_dollars(value),
            probability,
            owner: "John Smith".to_owned(),
            expected_close_date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            created_at: NaiveDate::from_ymd_opt(2024, 11, 20).unwrap(),
            products: vec![],
            notes: String::new(),
        }
    }

    #[test]
    fn test_weighted_value() {
        assert_eq!(
            deal(120_000, 60).weighted_value(),
            Money::from_dollars(72_000)
        );
        assert_eq!(deal(85_000, 100).weighted_value(), Money::from_dollars(85_000));
        assert_eq!(deal(85_000, 0).weighted_value(), Money::ZERO);
    }
}
