//! In-memory page state for flows running with state tracking disabled.
//!
//! Same read/write surface as [`StateManager`](super::StateManager) but with no session,
//! no persistence and therefore no expiry.

use serde_json::Value;

use crate::graph::FlowGraph;
use crate::state::{entry_mut, merge_entries, FlowState, PageState, PageStateEntry};
use crate::store::state_manager::state_up_to;

#[derive(Debug, Clone, Default)]
pub struct MemoryEntries {
    entries: Vec<PageStateEntry>,
}

impl MemoryEntries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[PageStateEntry] {
        &self.entries
    }

    pub fn page_state(&self, page: &str) -> PageState {
        self.entries
            .iter()
            .find(|e| e.page == page)
            .map(|e| e.state.clone())
            .unwrap_or_default()
    }

    pub fn set_field(&mut self, page: &str, key: &str, value: Value) {
        entry_mut(&mut self.entries, page)
            .state
            .insert(key.to_string(), value);
    }

    pub fn set_fields(&mut self, page: &str, updates: PageState) {
        entry_mut(&mut self.entries, page).state.extend(updates);
    }

    pub fn aggregate_state(&self) -> FlowState {
        merge_entries(&self.entries)
    }

    pub fn aggregate_state_up_to(&self, graph: &FlowGraph, page: &str) -> FlowState {
        state_up_to(graph, &self.entries, page)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn clear_page(&mut self, page: &str) {
        self.entries.retain(|e| e.page != page);
    }
}
