//! Opportunities module - pipeline records created from converted leads.

mod opportunities_model;

// Re-export the public interface
pub use opportunities_model::{
    format_amount, next_opportunity_id, ConversionRequest, Opportunity, OpportunityStage,
};
