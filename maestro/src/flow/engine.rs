//! The flow: current page, session and state, plus read-only queries.
//!
//! Reconciliation lives in `reconcile.rs`, navigation in `navigate.rs`.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::flow::session::{generate_session_id, StateSource};
use crate::flow::{FlowConfig, NavigationSnapshot, Transition};
use crate::graph::{is_sentinel, FlowGraph, FlowNode, PageId};
use crate::logging;
use crate::params::UrlParamsAdapter;
use crate::state::{FlowState, PageState};
use crate::store::{MemoryEntries, StateManager, StorageBackend};

/// A running multi-step flow over one graph, one URL and one session.
///
/// Derives the current page from the URL's page parameter, the session's state and the
/// graph. Every operation that may move the flow returns the settled transitions it
/// produced, in order; the configured handler sees the same transitions.
///
/// **Interaction**: The host calls [`reconcile`](Self::reconcile) after any external URL
/// change (link, back/forward) and after mounting. Navigation and state operations
/// reconcile on their own.
pub struct Flow {
    pub(super) graph: Arc<FlowGraph>,
    pub(super) config: FlowConfig,
    pub(super) urls: Arc<dyn UrlParamsAdapter>,
    pub(super) source: StateSource,
    pub(super) session_id: String,
    pub(super) current_page: Option<PageId>,
    pub(super) is_validating: bool,
    pub(super) is_checking_skip: bool,
    pub(super) state_version: u64,
    /// Session bootstrap latch; set once the session's bucket is known to exist.
    pub(super) bootstrapped: bool,
    state_cache: RefCell<Option<(u64, FlowState)>>,
}

impl Flow {
    /// Creates a flow that has not yet resolved its page.
    ///
    /// Adopts the session id from the URL, or generates one and writes it into the
    /// current history entry. `backend` is ignored when state tracking is disabled.
    pub fn new(
        graph: Arc<FlowGraph>,
        config: FlowConfig,
        urls: Arc<dyn UrlParamsAdapter>,
        backend: Arc<dyn StorageBackend>,
    ) -> Self {
        let source = if config.enable_state {
            StateSource::Session(StateManager::with_prefix(
                backend,
                config.storage_prefix.clone(),
            ))
        } else {
            StateSource::Memory(MemoryEntries::new())
        };
        let session_id = match urls.get_param(&config.session_param) {
            Some(id) if !id.is_empty() => id,
            _ => {
                let id = generate_session_id();
                urls.replace_param(&config.session_param, &id);
                id
            }
        };
        Self {
            graph,
            config,
            urls,
            source,
            session_id,
            current_page: None,
            is_validating: true,
            is_checking_skip: false,
            state_version: 0,
            bootstrapped: false,
            state_cache: RefCell::new(None),
        }
    }

    pub fn graph(&self) -> &Arc<FlowGraph> {
        &self.graph
    }

    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    /// Resolved page: a graph page, a sentinel, or `None` before validation and for
    /// flows without an entry point.
    pub fn current_page(&self) -> Option<&str> {
        self.current_page.as_deref()
    }

    /// Node of the current page; `None` for sentinels.
    pub fn current_node(&self) -> Option<&FlowNode> {
        self.current_page.as_deref().and_then(|p| self.graph.node(p))
    }

    pub fn node(&self, page: &str) -> Option<&FlowNode> {
        self.graph.node(page)
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn is_validating(&self) -> bool {
        self.is_validating
    }

    pub fn is_checking_skip(&self) -> bool {
        self.is_checking_skip
    }

    pub fn snapshot(&self) -> NavigationSnapshot {
        NavigationSnapshot {
            current_page: self.current_page.clone(),
            is_validating: self.is_validating,
            is_checking_skip: self.is_checking_skip,
            state_version: self.state_version,
        }
    }

    /// True when the current page has a reachable, non-skipped next page.
    pub fn has_next(&self) -> bool {
        match self.current_page.as_deref() {
            Some(page) => self.graph.next_page(page, &self.state()).is_some(),
            None => false,
        }
    }

    pub fn url_param(&self, name: &str) -> Option<String> {
        self.urls.get_param(name)
    }

    pub fn url_params(&self) -> BTreeMap<String, String> {
        self.urls.get_all_params()
    }

    /// Aggregate state of every page. Recomputed only when the state version changes.
    pub fn state(&self) -> FlowState {
        let mut cache = self.state_cache.borrow_mut();
        if let Some((version, state)) = cache.as_ref() {
            if *version == self.state_version {
                return state.clone();
            }
        }
        let state = self.source.aggregate(&self.session_id);
        *cache = Some((self.state_version, state.clone()));
        state
    }

    /// Aggregate state of pages in natural order up to and including `page`.
    pub fn state_up_to(&self, page: &str) -> FlowState {
        self.source
            .aggregate_up_to(&self.graph, &self.session_id, page)
    }

    pub fn page_state(&self, page: &str) -> PageState {
        self.source.page_state(&self.session_id, page)
    }

    /// Sets one field on the current page, then reconciles (the write may make the
    /// current page skippable). No-op without a current graph page.
    pub fn update_state(&mut self, key: &str, value: Value) -> Vec<Transition> {
        let Some(page) = self.writable_page() else {
            return Vec::new();
        };
        self.source.set_field(&self.session_id, &page, key, value);
        self.state_version += 1;
        self.reconcile()
    }

    /// Shallow-merges `updates` into the current page's fields, then reconciles.
    pub fn update_state_batch(&mut self, updates: PageState) -> Vec<Transition> {
        let Some(page) = self.writable_page() else {
            return Vec::new();
        };
        self.source.set_fields(&self.session_id, &page, updates);
        self.state_version += 1;
        self.reconcile()
    }

    /// Clears the session's state (or the in-memory entries). The current page is kept.
    pub fn complete_flow(&mut self) {
        self.source.clear(&self.session_id);
        self.state_version += 1;
        logging::log_session_cleared(&self.session_id);
    }

    fn writable_page(&self) -> Option<PageId> {
        self.current_page.clone().filter(|p| !is_sentinel(p))
    }

    /// Records a settled change, logs it and calls the handler.
    pub(super) fn emit(
        &self,
        out: &mut Vec<Transition>,
        page: Option<PageId>,
        previous: Option<PageId>,
    ) {
        logging::log_transition(page.as_deref(), previous.as_deref());
        let transition = Transition {
            page,
            previous,
            state: self.state(),
            is_checking_skip: self.is_checking_skip,
        };
        if let Some(handler) = &self.config.on_page_change {
            handler(&transition);
        }
        out.push(transition);
    }

    /// Makes `page` current and emits the change.
    pub(super) fn adopt(&mut self, out: &mut Vec<Transition>, page: PageId) {
        let previous = self.current_page.replace(page.clone());
        self.emit(out, Some(page), previous);
    }
}

impl fmt::Debug for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flow")
            .field("session_id", &self.session_id)
            .field("current_page", &self.current_page)
            .field("is_validating", &self.is_validating)
            .field("state_version", &self.state_version)
            .field("config", &self.config)
            .finish()
    }
}
