//! Per-page form state types.
//!
//! Form fields are namespaced by page: the aggregate [`FlowState`] maps each page id to
//! its own [`PageState`], so the same field name on two pages never collides.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::graph::PageId;

/// Field values of one page.
pub type PageState = serde_json::Map<String, Value>;

/// Aggregate state of a session: page id to that page's fields.
pub type FlowState = BTreeMap<PageId, PageState>;

/// One record of a persisted session bucket.
///
/// A bucket is an ordered list of entries with at most one entry per page. Serialized as
/// `{ "page": "...", "state": { ... } }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageStateEntry {
    pub page: PageId,
    #[serde(default)]
    pub state: PageState,
}

impl PageStateEntry {
    /// Creates an empty entry for `page`.
    pub fn empty(page: impl Into<PageId>) -> Self {
        Self {
            page: page.into(),
            state: PageState::new(),
        }
    }
}

/// Flattens entries into an aggregate state, one key per page.
pub fn merge_entries(entries: &[PageStateEntry]) -> FlowState {
    entries
        .iter()
        .map(|e| (e.page.clone(), e.state.clone()))
        .collect()
}

/// Looks up `key` in `page`'s fields.
pub fn field<'a>(state: &'a FlowState, page: &str, key: &str) -> Option<&'a Value> {
    state.get(page).and_then(|fields| fields.get(key))
}

/// Finds the entry for `page`, appending an empty one if absent.
pub(crate) fn entry_mut<'a>(
    entries: &'a mut Vec<PageStateEntry>,
    page: &str,
) -> &'a mut PageStateEntry {
    let idx = match entries.iter().position(|e| e.page == page) {
        Some(i) => i,
        None => {
            entries.push(PageStateEntry::empty(page));
            entries.len() - 1
        }
    };
    &mut entries[idx]
}
