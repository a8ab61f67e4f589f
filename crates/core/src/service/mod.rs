//! Service module - the simulated backend wrapping the store.
//!
//! Every operation suspends once for its configured latency, then asks the
//! [`FailureInjector`] whether to fail. Both seams are trait objects so tests
//! can force outcomes and skip the waiting.

mod failure;
mod latency;
mod lead_service;
mod lead_service_traits;
mod service_model;


// Re-export the public interface
pub use failure::{AlwaysFail, FailureInjector, NeverFail, RandomFailures, ScriptedFailures};
pub use latency::{LatencyScheduler, NoLatency, TokioLatency};
pub use lead_service::SimulatedLeadService;
pub use lead_service_traits::LeadServiceTrait;
pub use service_model::{ConvertResult, Operation, UpdateResult};
