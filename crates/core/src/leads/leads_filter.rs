//! Filter and sort engine for the lead list.
//!
//! Everything here is a pure function of its inputs. Predicates are ANDed
//! together and the sort runs after filtering; it is stable, so leads with
//! equal scores keep their original relative order.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::leads_model::{Lead, LeadStatus};
use crate::constants::{FILTER_ALL, MAX_SCORE, MIN_SCORE};
use crate::errors::{Result, ValidationError};

/// Direction of the score sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Status filter; `"all"` disables it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum StatusFilter {
    #[default]
    All,
    Only(LeadStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: LeadStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl TryFrom<String> for StatusFilter {
    type Error = ValidationError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        if value == FILTER_ALL {
            Ok(StatusFilter::All)
        } else {
            value.parse().map(StatusFilter::Only)
        }
    }
}

impl From<StatusFilter> for String {
    fn from(filter: StatusFilter) -> Self {
        filter.to_string()
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str(FILTER_ALL),
            StatusFilter::Only(status) => f.write_str(status.as_str()),
        }
    }
}

/// Source filter; `"all"` disables it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum SourceFilter {
    #[default]
    All,
    Only(String),
}

impl SourceFilter {
    pub fn matches(&self, source: &str) -> bool {
        match self {
            SourceFilter::All => true,
            SourceFilter::Only(wanted) => wanted == source,
        }
    }
}

impl From<String> for SourceFilter {
    fn from(value: String) -> Self {
        if value == FILTER_ALL {
            SourceFilter::All
        } else {
            SourceFilter::Only(value)
        }
    }
}

impl From<&str> for SourceFilter {
    fn from(value: &str) -> Self {
        SourceFilter::from(value.to_string())
    }
}

impl From<SourceFilter> for String {
    fn from(filter: SourceFilter) -> Self {
        match filter {
            SourceFilter::All => FILTER_ALL.to_string(),
            SourceFilter::Only(source) => source,
        }
    }
}

/// Inclusive score bounds.
///
/// Deserialization goes through [`ScoreRange::new`], so parsed criteria
/// never hold an inverted or out-of-scale range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawScoreRange")]
pub struct ScoreRange {
    pub min: u8,
    pub max: u8,
}

impl ScoreRange {
    pub fn new(min: u8, max: u8) -> Result<Self> {
        if max > MAX_SCORE {
            return Err(ValidationError::ScoreOutOfRange(u32::from(max)).into());
        }
        if min > max {
            return Err(ValidationError::InvalidInput(format!(
                "Score range minimum {} exceeds maximum {}",
                min, max
            ))
            .into());
        }
        Ok(Self { min, max })
    }

    pub fn contains(&self, score: u8) -> bool {
        self.min <= score && score <= self.max
    }
}

#[derive(Deserialize)]
struct RawScoreRange {
    min: u8,
    max: u8,
}

impl TryFrom<RawScoreRange> for ScoreRange {
    type Error = crate::errors::Error;

    fn try_from(raw: RawScoreRange) -> Result<Self> {
        ScoreRange::new(raw.min, raw.max)
    }
}

impl Default for ScoreRange {
    fn default() -> Self {
        Self {
            min: MIN_SCORE,
            max: MAX_SCORE,
        }
    }
}

/// Criteria driving the displayed lead list.
///
/// `Default` is the cleared state: no search, all statuses and sources,
/// the full score range, best scores first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub search_term: String,
    pub status_filter: StatusFilter,
    pub source_filter: SourceFilter,
    pub score_range: ScoreRange,
    pub sort_order: SortOrder,
}

impl FilterCriteria {
    /// True if any predicate narrows the list. Sort order is not a filter.
    pub fn has_active_filters(&self) -> bool {
        !self.search_term.is_empty()
            || self.status_filter != StatusFilter::All
            || self.source_filter != SourceFilter::All
            || self.score_range != ScoreRange::default()
    }

    /// Returns true if `lead` passes every predicate.
    pub fn matches(&self, lead: &Lead) -> bool {
        self.matches_lowered(lead, &self.search_term.to_lowercase())
    }

    fn matches_lowered(&self, lead: &Lead, needle: &str) -> bool {
        matches_search(lead, needle)
            && self.status_filter.matches(lead.status)
            && self.source_filter.matches(&lead.source)
            && self.score_range.contains(lead.score)
    }
}

/// Case-insensitive substring match against name, company or email.
fn matches_search(lead: &Lead, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [&lead.name, &lead.company, &lead.email]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Derives the displayed subset and order of `leads`.
pub fn view(leads: &[Lead], filters: &FilterCriteria) -> Vec<Lead> {
    let needle = filters.search_term.to_lowercase();
    let mut visible: Vec<Lead> = leads
        .iter()
        .filter(|lead| filters.matches_lowered(lead, &needle))
        .cloned()
        .collect();

    match filters.sort_order {
        SortOrder::Asc => visible.sort_by_key(|lead| lead.score),
        SortOrder::Desc => visible.sort_by(|a, b| b.score.cmp(&a.score)),
    }

    visible
}

/// Sorted set of distinct lead sources, for the source selector.
pub fn available_sources(leads: &[Lead]) -> Vec<String> {
    leads
        .iter()
        .map(|lead| lead.source.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
