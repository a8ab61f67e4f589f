//! Seller Console Core - the in-memory data layer behind the seller console.
//!
//! This crate holds the lead and opportunity collections, a simulated
//! backend that adds latency and random failures to every operation, and a
//! pure filter engine for the lead list. Rendering is left to callers: they
//! drive the [`service::LeadServiceTrait`] operations and read state through
//! a [`store::StoreReader`].

pub mod config;
pub mod constants;
pub mod errors;
pub mod leads;
pub mod notifications;
pub mod opportunities;
pub mod service;
pub mod store;

// Re-export the main entry points
pub use config::{OperationProfile, ServiceConfig};
pub use service::{LeadServiceTrait, SimulatedLeadService};
pub use store::StoreReader;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
