//! Owned lead/opportunity state container.
//!
//! [`LeadStore`] is the single writer; its mutating methods are
//! crate-private and only the service layer calls them. Everyone else gets a
//! [`StoreReader`], which can read state and register for change events.

use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::debug;

use super::store_events::{StoreEvent, StoreEventSink};
use super::store_model::{ConsoleSummary, StoreSnapshot};
use crate::leads::{self, FilterCriteria, Lead, LeadUpdate};
use crate::opportunities::Opportunity;

#[derive(Default)]
struct StoreState {
    leads: Vec<Lead>,
    opportunities: Vec<Opportunity>,
    /// Load attempts currently in flight; `loading` is `pending_loads > 0`
    pending_loads: usize,
    last_error: Option<String>,
    /// Leads converted so far; reloads never bring them back
    converted_lead_ids: HashSet<String>,
}

#[derive(Default)]
struct Shared {
    state: RwLock<StoreState>,
    sinks: RwLock<Vec<Arc<dyn StoreEventSink>>>,
}

impl Shared {
    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn emit(&self, event: StoreEvent) {
        let sinks = self
            .sinks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for sink in sinks {
            sink.emit(event.clone());
        }
    }
}

/// The process-wide lead and opportunity store.
#[derive(Default)]
pub struct LeadStore {
    shared: Arc<Shared>,
}

impl LeadStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a read-only handle to this store.
    pub fn reader(&self) -> StoreReader {
        StoreReader {
            shared: Arc::clone(&self.shared),
        }
    }

    /// Marks a load attempt as started and clears the previous error.
    ///
    /// With `reset_leads` the lead collection is emptied first, as a retry
    /// does.
    pub(crate) fn begin_load(&self, reset_leads: bool) {
        {
            let mut state = self.shared.write();
            state.pending_loads += 1;
            state.last_error = None;
            if reset_leads {
                state.leads.clear();
            }
        }
        self.shared.emit(StoreEvent::LoadStarted);
    }

    /// Replaces the lead collection with `leads`, skipping converted ones.
    ///
    /// Returns the number of leads now in the store.
    pub(crate) fn complete_load(&self, leads: &[Lead]) -> usize {
        let count = {
            let mut state = self.shared.write();
            state.pending_loads = state.pending_loads.saturating_sub(1);
            state.last_error = None;
            let fresh: Vec<Lead> = leads
                .iter()
                .filter(|lead| !state.converted_lead_ids.contains(&lead.id))
                .cloned()
                .collect();
            state.leads = fresh;
            state.leads.len()
        };
        self.shared.emit(StoreEvent::LeadsLoaded { count });
        count
    }

    /// Records a failed load: the lead collection is left empty.
    pub(crate) fn fail_load(&self, message: &str) {
        {
            let mut state = self.shared.write();
            state.pending_loads = state.pending_loads.saturating_sub(1);
            state.leads.clear();
            state.last_error = Some(message.to_string());
        }
        self.shared.emit(StoreEvent::LoadFailed {
            error: message.to_string(),
        });
    }

    /// Merges `update` into the lead with `lead_id`.
    ///
    /// Returns the updated lead, or `None` if no lead has that id.
    pub(crate) fn update_lead(&self, lead_id: &str, update: &LeadUpdate) -> Option<Lead> {
        let updated = {
            let mut state = self.shared.write();
            let lead = state.leads.iter_mut().find(|lead| lead.id == lead_id)?;
            lead.apply(update);
            lead.clone()
        };
        debug!("Lead {} updated in store", lead_id);
        self.shared.emit(StoreEvent::LeadUpdated {
            lead_id: lead_id.to_string(),
        });
        Some(updated)
    }

    /// Removes the lead with `lead_id` and appends `opportunity`, atomically.
    ///
    /// Returns false and changes nothing if the lead is not present.
    pub(crate) fn convert_lead(&self, lead_id: &str, opportunity: Opportunity) -> bool {
        let opportunity_id = opportunity.id.clone();
        {
            let mut state = self.shared.write();
            let Some(position) = state.leads.iter().position(|lead| lead.id == lead_id) else {
                return false;
            };
            state.leads.remove(position);
            state.opportunities.push(opportunity);
            state.converted_lead_ids.insert(lead_id.to_string());
        }
        debug!("Lead {} converted into {}", lead_id, opportunity_id);
        self.shared.emit(StoreEvent::LeadConverted {
            lead_id: lead_id.to_string(),
            opportunity_id,
        });
        true
    }
}

/// Cloneable read-only handle to a [`LeadStore`].
#[derive(Clone)]
pub struct StoreReader {
    shared: Arc<Shared>,
}

impl StoreReader {
    pub fn leads(&self) -> Vec<Lead> {
        self.shared.read().leads.clone()
    }

    pub fn lead(&self, lead_id: &str) -> Option<Lead> {
        self.shared
            .read()
            .leads
            .iter()
            .find(|lead| lead.id == lead_id)
            .cloned()
    }

    pub fn opportunities(&self) -> Vec<Opportunity> {
        self.shared.read().opportunities.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.shared.read().pending_loads > 0
    }

    pub fn last_error(&self) -> Option<String> {
        self.shared.read().last_error.clone()
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        let state = self.shared.read();
        StoreSnapshot {
            leads: state.leads.clone(),
            opportunities: state.opportunities.clone(),
            loading: state.pending_loads > 0,
            last_error: state.last_error.clone(),
        }
    }

    pub fn summary(&self) -> ConsoleSummary {
        let state = self.shared.read();
        ConsoleSummary::from_collections(&state.leads, &state.opportunities)
    }

    /// Filtered and sorted leads for display.
    pub fn view(&self, filters: &FilterCriteria) -> Vec<Lead> {
        leads::view(&self.shared.read().leads, filters)
    }

    /// Distinct sources of the current leads, sorted.
    pub fn available_sources(&self) -> Vec<String> {
        leads::available_sources(&self.shared.read().leads)
    }

    /// Registers `sink` for every subsequent store event.
    pub fn subscribe(&self, sink: Arc<dyn StoreEventSink>) {
        self.shared
            .sinks
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(sink);
    }
}
