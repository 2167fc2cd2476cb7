//! Session ids and the state source behind a flow.

use serde_json::Value;

use crate::graph::FlowGraph;
use crate::state::{FlowState, PageState};
use crate::store::{MemoryEntries, StateManager};

/// Length of generated session ids.
pub const SESSION_ID_LEN: usize = 5;

/// Short random session id: the last five hex digits of a v4 UUID.
pub fn generate_session_id() -> String {
    let simple = uuid::Uuid::new_v4().simple().to_string();
    simple[simple.len() - SESSION_ID_LEN..].to_string()
}

/// Where a flow reads and writes page fields.
///
/// `Session` persists per session id through a [`StateManager`]; `Memory` is the
/// state-tracking-disabled mode, which has no sessions and never expires.
pub(crate) enum StateSource {
    Session(StateManager),
    Memory(MemoryEntries),
}

impl StateSource {
    /// True when the session has a bucket. Always true in memory mode.
    pub(crate) fn session_exists(&self, session: &str) -> bool {
        match self {
            StateSource::Session(m) => m.has_session(session),
            StateSource::Memory(_) => true,
        }
    }

    pub(crate) fn is_persistent(&self) -> bool {
        matches!(self, StateSource::Session(_))
    }

    /// Seeds every page for a fresh session. Returns the number of pages added.
    pub(crate) fn pre_register(&self, graph: &FlowGraph, session: &str) -> usize {
        match self {
            StateSource::Session(m) => m.pre_register_pages(graph, session),
            StateSource::Memory(_) => 0,
        }
    }

    pub(crate) fn page_state(&self, session: &str, page: &str) -> PageState {
        match self {
            StateSource::Session(m) => m.page_state(session, page),
            StateSource::Memory(m) => m.page_state(page),
        }
    }

    pub(crate) fn set_field(&mut self, session: &str, page: &str, key: &str, value: Value) {
        match self {
            StateSource::Session(m) => m.set_field(session, page, key, value),
            StateSource::Memory(m) => m.set_field(page, key, value),
        }
    }

    pub(crate) fn set_fields(&mut self, session: &str, page: &str, updates: PageState) {
        match self {
            StateSource::Session(m) => m.set_fields(session, page, updates),
            StateSource::Memory(m) => m.set_fields(page, updates),
        }
    }

    pub(crate) fn aggregate(&self, session: &str) -> FlowState {
        match self {
            StateSource::Session(m) => m.aggregate_state(session),
            StateSource::Memory(m) => m.aggregate_state(),
        }
    }

    pub(crate) fn aggregate_up_to(&self, graph: &FlowGraph, session: &str, page: &str) -> FlowState {
        match self {
            StateSource::Session(m) => m.aggregate_state_up_to(graph, session, page),
            StateSource::Memory(m) => m.aggregate_state_up_to(graph, page),
        }
    }

    /// Drops all state of the session (or all in-memory entries).
    pub(crate) fn clear(&mut self, session: &str) {
        match self {
            StateSource::Session(m) => m.clear_session(session),
            StateSource::Memory(m) => m.clear(),
        }
    }
}
