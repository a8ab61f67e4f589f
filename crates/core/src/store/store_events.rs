//! Store change events and the sink trait observers implement.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

/// Facts about store mutations, emitted after the state is updated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreEvent {
    /// A load or retry attempt started.
    LoadStarted,

    /// A load attempt populated the lead collection.
    LeadsLoaded { count: usize },

    /// A load attempt failed and the lead collection was cleared.
    LoadFailed { error: String },

    /// A lead was edited in place.
    LeadUpdated { lead_id: String },

    /// A lead was removed and replaced by an opportunity.
    LeadConverted {
        lead_id: String,
        opportunity_id: String,
    },
}

/// Trait for receiving store change notifications.
///
/// `emit()` is called synchronously after the store lock is released, so
/// implementations may read the store but must not block.
pub trait StoreEventSink: Send + Sync {
    fn emit(&self, event: StoreEvent);
}

/// No-op implementation for contexts that don't need notifications.
#[derive(Clone, Default)]
pub struct NoOpStoreEventSink;

impl StoreEventSink for NoOpStoreEventSink {
    fn emit(&self, _event: StoreEvent) {}
}

/// Mock sink for testing - collects emitted events.
#[derive(Clone, Default)]
pub struct MockStoreEventSink {
    events: Arc<Mutex<Vec<StoreEvent>>>,
}

impl MockStoreEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected events.
    pub fn events(&self) -> Vec<StoreEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }

    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StoreEventSink for MockStoreEventSink {
    fn emit(&self, event: StoreEvent) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_sink_does_not_panic() {
        let sink = NoOpStoreEventSink;
        sink.emit(StoreEvent::LoadStarted);
        sink.emit(StoreEvent::LeadsLoaded { count: 3 });
    }

    #[test]
    fn test_mock_sink_collects_events() {
        let sink = MockStoreEventSink::new();
        assert!(sink.is_empty());

        sink.emit(StoreEvent::LoadStarted);
        sink.emit(StoreEvent::LeadUpdated {
            lead_id: "1".to_string(),
        });
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.events()[0], StoreEvent::LoadStarted);

        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_event_json_is_tagged() {
        let json = serde_json::to_value(StoreEvent::LeadConverted {
            lead_id: "1".to_string(),
            opportunity_id: "opp-1".to_string(),
        })
        .unwrap();
        assert_eq!(json["type"], "lead_converted");
        assert_eq!(json["lead_id"], "1");
    }
}
