//! Read models exposed by the store.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::leads::{Lead, LeadStatus};
use crate::opportunities::Opportunity;

/// Point-in-time copy of everything the store holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub leads: Vec<Lead>,
    pub opportunities: Vec<Opportunity>,
    pub loading: bool,
    pub last_error: Option<String>,
}

/// Header counters of the console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleSummary {
    pub active_leads: usize,
    pub opportunities: usize,
    pub qualified_leads: usize,
    /// Sum of all specified opportunity amounts
    pub pipeline_amount: Decimal,
}

impl ConsoleSummary {
    pub fn from_collections(leads: &[Lead], opportunities: &[Opportunity]) -> Self {
        Self {
            active_leads: leads.len(),
            opportunities: opportunities.len(),
            qualified_leads: leads
                .iter()
                .filter(|lead| lead.status == LeadStatus::Qualified)
                .count(),
            pipeline_amount: opportunities.iter().filter_map(|o| o.amount).sum(),
        }
    }
}
