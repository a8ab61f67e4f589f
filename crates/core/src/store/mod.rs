//! Store module - the in-memory state container and its change events.

mod lead_store;
mod store_events;
mod store_model;

// Re-export the public interface
pub use lead_store::{LeadStore, StoreReader};
pub use store_events::{MockStoreEventSink, NoOpStoreEventSink, StoreEvent, StoreEventSink};
pub use store_model::{ConsoleSummary, StoreSnapshot};
