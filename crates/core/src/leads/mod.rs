//! Leads module - domain models, fixture data, and the filter engine.

mod leads_filter;
mod leads_fixture;
mod leads_model;


// Re-export the public interface
pub use leads_filter::{
    available_sources, view, FilterCriteria, ScoreRange, SortOrder, SourceFilter, StatusFilter,
};
pub use leads_fixture::Fixture;
pub use leads_model::{is_valid_email, Lead, LeadStatus, LeadUpdate, ScoreTier};
