//! Lead service trait.
//!
//! This is the whole surface the presentation layer calls. Failures come
//! back as `Err` values carrying the message to show the user.

use async_trait::async_trait;

use crate::errors::Result;
use crate::leads::{Lead, LeadUpdate};
use crate::opportunities::{ConversionRequest, Opportunity};
use crate::store::StoreReader;

/// Trait defining the contract for the simulated lead backend.
#[async_trait]
pub trait LeadServiceTrait: Send + Sync {
    /// Loads the fixture leads into the store.
    ///
    /// On failure the lead collection is left empty and the store's
    /// `last_error` is set until an explicit retry.
    async fn load_leads(&self) -> Result<Vec<Lead>>;

    /// Clears the leads and error flag, then loads again.
    async fn retry_load(&self) -> Result<Vec<Lead>>;

    /// Merges `update` into the lead with `lead_id` and returns the result.
    ///
    /// Invalid input is rejected before any simulated latency.
    async fn update_lead(&self, lead_id: &str, update: LeadUpdate) -> Result<Lead>;

    /// Converts `lead` into a new opportunity and removes it from the leads.
    async fn convert_lead(&self, lead: &Lead, request: ConversionRequest) -> Result<Opportunity>;

    /// Read-only handle to the backing store.
    fn reader(&self) -> StoreReader;
}
