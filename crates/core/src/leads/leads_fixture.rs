//! Static lead dataset served by the simulated backend.

use std::collections::HashSet;

use super::leads_model::Lead;
use crate::errors::{Error, Result};

const BUILTIN_LEADS_JSON: &str = include_str!("../../data/leads.json");

/// A validated set of seed leads.
///
/// Ids are unique and every score is within range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    leads: Vec<Lead>,
}

impl Fixture {
    pub fn new(leads: Vec<Lead>) -> Result<Self> {
        let mut seen = HashSet::new();
        for lead in &leads {
            lead.validate()?;
            if !seen.insert(lead.id.as_str()) {
                return Err(Error::Fixture(format!("duplicate lead id '{}'", lead.id)));
            }
        }
        Ok(Self { leads })
    }

    /// Parses a JSON array of lead records.
    pub fn from_json(json: &str) -> Result<Self> {
        let leads: Vec<Lead> = serde_json::from_str(json)?;
        Self::new(leads)
    }

    /// The dataset embedded in the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_LEADS_JSON)
    }

    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    pub fn len(&self) -> usize {
        self.leads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }
}
