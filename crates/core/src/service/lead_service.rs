//! Simulated implementation of the lead service.
//!
//! Each operation validates its input, waits out the configured latency,
//! rolls for an injected failure and only then touches the store.

use std::sync::Arc;

use log::{debug, info, warn};

use super::failure::{FailureInjector, RandomFailures};
use super::latency::{LatencyScheduler, TokioLatency};
use super::lead_service_traits::LeadServiceTrait;
use super::service_model::Operation;
use crate::config::ServiceConfig;
use crate::constants::{CONVERT_FAILURE_MESSAGE, LOAD_FAILURE_MESSAGE, UPDATE_FAILURE_MESSAGE};
use crate::errors::{Result, ServiceError};
use crate::leads::{Fixture, Lead, LeadUpdate};
use crate::opportunities::{ConversionRequest, Opportunity};
use crate::store::{LeadStore, StoreReader};

/// In-memory stand-in for the remote leads API.
///
/// Owns the store; every mutation goes through one of the trait operations.
pub struct SimulatedLeadService {
    store: LeadStore,
    fixture: Fixture,
    config: ServiceConfig,
    failures: Arc<dyn FailureInjector>,
    latency: Arc<dyn LatencyScheduler>,
}

impl SimulatedLeadService {
    /// Creates a new SimulatedLeadService instance
    pub fn new(
        fixture: Fixture,
        config: ServiceConfig,
        failures: Arc<dyn FailureInjector>,
        latency: Arc<dyn LatencyScheduler>,
    ) -> Self {
        Self {
            store: LeadStore::new(),
            fixture,
            config,
            failures,
            latency,
        }
    }

    /// Builtin fixture, random failures and tokio timers, per `config`.
    pub fn from_config(config: ServiceConfig) -> Result<Self> {
        config.validate()?;
        let failures = Arc::new(RandomFailures::from_config(&config));
        Ok(Self::new(
            Fixture::builtin()?,
            config,
            failures,
            Arc::new(TokioLatency),
        ))
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Waits out the simulated latency, then rolls for failure.
    ///
    /// Returns true if this invocation should fail.
    async fn simulate(&self, operation: Operation) -> bool {
        let latency = self.config.profile(operation).latency();
        debug!("Simulating {} latency of {:?}", operation, latency);
        self.latency.wait(operation, latency).await;

        let failed = self.failures.should_fail(operation);
        if failed {
            warn!("Injected failure for {} operation", operation);
        }
        failed
    }

    async fn fetch(&self, operation: Operation) -> Result<Vec<Lead>> {
        if self.simulate(operation).await {
            self.store.fail_load(LOAD_FAILURE_MESSAGE);
            return Err(ServiceError::network(LOAD_FAILURE_MESSAGE).into());
        }

        let count = self.store.complete_load(self.fixture.leads());
        info!("Loaded {} leads ({})", count, operation);
        Ok(self.store.reader().leads())
    }
}

#[async_trait::async_trait]
impl LeadServiceTrait for SimulatedLeadService {
    async fn load_leads(&self) -> Result<Vec<Lead>> {
        debug!("Loading leads...");
        self.store.begin_load(false);
        self.fetch(Operation::Load).await
    }

    async fn retry_load(&self) -> Result<Vec<Lead>> {
        debug!("Retrying lead load...");
        self.store.begin_load(true);
        self.fetch(Operation::Retry).await
    }

    async fn update_lead(&self, lead_id: &str, update: LeadUpdate) -> Result<Lead> {
        if let Err(err) = update.validate() {
            warn!("Rejected update for lead {}: {}", lead_id, err);
            return Err(err);
        }

        debug!("Updating lead {}...", lead_id);
        if self.simulate(Operation::Update).await {
            return Err(ServiceError::update(UPDATE_FAILURE_MESSAGE).into());
        }

        self.store
            .update_lead(lead_id, &update)
            .ok_or_else(|| ServiceError::update(format!("Lead not found: {}", lead_id)).into())
    }

    async fn convert_lead(&self, lead: &Lead, request: ConversionRequest) -> Result<Opportunity> {
        if let Err(err) = request.validate() {
            warn!("Rejected conversion of lead {}: {}", lead.id, err);
            return Err(err);
        }

        debug!("Converting lead {} at stage {}...", lead.id, request.stage);
        if self.simulate(Operation::Convert).await {
            return Err(ServiceError::conversion(CONVERT_FAILURE_MESSAGE).into());
        }

        let opportunity = Opportunity::from_lead(lead, &request);
        if !self.store.convert_lead(&lead.id, opportunity.clone()) {
            return Err(ServiceError::conversion(format!("Lead not found: {}", lead.id)).into());
        }

        info!("Converted lead {} into opportunity {}", lead.id, opportunity.id);
        Ok(opportunity)
    }

    fn reader(&self) -> StoreReader {
        self.store.reader()
    }
}
