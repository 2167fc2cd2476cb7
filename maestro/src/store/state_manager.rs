//! Session state manager: per-page form fields persisted per session.
//!
//! A session bucket is a JSON array of [`PageStateEntry`] stored under
//! `<prefix><session-id>`. Every write rewrites the whole bucket. Storage and parse
//! failures never reach the caller: reads degrade to empty state and writes are dropped,
//! each with a logged diagnostic.

use std::collections::HashSet;
use std::sync::Arc;

use serde_json::Value;

use crate::error::StorageError;
use crate::graph::FlowGraph;
use crate::logging;
use crate::state::{entry_mut, merge_entries, FlowState, PageState, PageStateEntry};
use crate::store::StorageBackend;

/// Default key prefix for session buckets.
pub const STORAGE_PREFIX: &str = "flow:";

/// Reads and writes session buckets through a [`StorageBackend`].
///
/// Cheap to clone; the backend is shared.
#[derive(Clone)]
pub struct StateManager {
    backend: Arc<dyn StorageBackend>,
    prefix: String,
}

impl StateManager {
    /// Manager using [`STORAGE_PREFIX`].
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self::with_prefix(backend, STORAGE_PREFIX)
    }

    pub fn with_prefix(backend: Arc<dyn StorageBackend>, prefix: impl Into<String>) -> Self {
        Self {
            backend,
            prefix: prefix.into(),
        }
    }

    pub fn storage_key(&self, session: &str) -> String {
        format!("{}{}", self.prefix, session)
    }

    /// All entries of a session bucket; empty when absent, unreadable or unparsable.
    ///
    /// Duplicate page entries in a stored bucket are collapsed to the first one.
    pub fn entries(&self, session: &str) -> Vec<PageStateEntry> {
        if !self.backend.is_available() {
            return Vec::new();
        }
        let key = self.storage_key(session);
        let raw = match self.backend.get_item(&key) {
            Ok(Some(raw)) if !raw.is_empty() => raw,
            Ok(_) => return Vec::new(),
            Err(e) => {
                logging::log_storage_read_error(&key, &e);
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<PageStateEntry>>(&raw) {
            Ok(mut entries) => {
                let mut seen = HashSet::new();
                entries.retain(|e| seen.insert(e.page.clone()));
                entries
            }
            Err(e) => {
                logging::log_storage_read_error(&key, &StorageError::from(e));
                Vec::new()
            }
        }
    }

    /// Replaces the whole bucket. Failures are logged and the write is dropped.
    pub fn set_entries(&self, session: &str, entries: &[PageStateEntry]) {
        if !self.backend.is_available() {
            return;
        }
        let key = self.storage_key(session);
        let raw = match serde_json::to_string(entries) {
            Ok(raw) => raw,
            Err(e) => {
                logging::log_storage_write_error(&key, &StorageError::from(e));
                return;
            }
        };
        if let Err(e) = self.backend.set_item(&key, &raw) {
            logging::log_storage_write_error(&key, &e);
        }
    }

    /// Seeds an empty entry for every page in natural order that has none yet.
    ///
    /// Creates the bucket, so [`has_session`](Self::has_session) is true afterwards (unless
    /// the write failed). Returns the number of entries added.
    pub fn pre_register_pages(&self, graph: &FlowGraph, session: &str) -> usize {
        if !self.backend.is_available() {
            return 0;
        }
        let mut entries = self.entries(session);
        let existing: HashSet<String> = entries.iter().map(|e| e.page.clone()).collect();
        let before = entries.len();
        for page in graph.pages_in_order() {
            if !existing.contains(&page) {
                entries.push(PageStateEntry::empty(page));
            }
        }
        self.set_entries(session, &entries);
        entries.len() - before
    }

    /// Fields of one page; empty when the page has no entry.
    pub fn page_state(&self, session: &str, page: &str) -> PageState {
        self.entries(session)
            .into_iter()
            .find(|e| e.page == page)
            .map(|e| e.state)
            .unwrap_or_default()
    }

    /// Sets one field, creating the page entry if needed.
    pub fn set_field(&self, session: &str, page: &str, key: &str, value: Value) {
        let mut entries = self.entries(session);
        entry_mut(&mut entries, page)
            .state
            .insert(key.to_string(), value);
        self.set_entries(session, &entries);
    }

    /// Shallow-merges `updates` into the page's fields.
    pub fn set_fields(&self, session: &str, page: &str, updates: PageState) {
        let mut entries = self.entries(session);
        entry_mut(&mut entries, page).state.extend(updates);
        self.set_entries(session, &entries);
    }

    /// Every page's fields, keyed by page. Recomputed on each call.
    pub fn aggregate_state(&self, session: &str) -> FlowState {
        merge_entries(&self.entries(session))
    }

    /// Fields of pages in natural order up to and including `page`.
    pub fn aggregate_state_up_to(&self, graph: &FlowGraph, session: &str, page: &str) -> FlowState {
        state_up_to(graph, &self.entries(session), page)
    }

    /// True once a bucket exists for the session, even if it holds no fields.
    pub fn has_session(&self, session: &str) -> bool {
        if !self.backend.is_available() {
            return false;
        }
        let key = self.storage_key(session);
        match self.backend.get_item(&key) {
            Ok(Some(raw)) => !raw.is_empty(),
            Ok(None) => false,
            Err(e) => {
                logging::log_storage_read_error(&key, &e);
                false
            }
        }
    }

    /// Removes the whole bucket.
    pub fn clear_session(&self, session: &str) {
        if !self.backend.is_available() {
            return;
        }
        let key = self.storage_key(session);
        if let Err(e) = self.backend.remove_item(&key) {
            logging::log_storage_write_error(&key, &e);
        }
    }

    /// Removes one page's entry, keeping the bucket.
    pub fn clear_page(&self, session: &str, page: &str) {
        let mut entries = self.entries(session);
        entries.retain(|e| e.page != page);
        self.set_entries(session, &entries);
    }
}

/// Truncates entries to the natural-order prefix ending at `page`.
pub(crate) fn state_up_to(graph: &FlowGraph, entries: &[PageStateEntry], page: &str) -> FlowState {
    let mut out = FlowState::new();
    for p in graph.pages_in_order() {
        if let Some(entry) = entries.iter().find(|e| e.page == p) {
            out.insert(p.clone(), entry.state.clone());
        }
        if p == page {
            break;
        }
    }
    out
}
