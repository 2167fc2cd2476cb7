//! Next / previous resolution and skip-chain traversal.
//!
//! Skip chains follow `next` (forward) or `previous_fallback` (backward) while the
//! visited page's skip rule holds. Each traversal threads an explicit visited set, so a
//! cycle of skipped pages ends in `None` after at most one visit per node.

use std::collections::HashSet;

use crate::graph::flow_graph::FlowGraph;
use crate::graph::node::{FlowNode, NextPage, PageId};
use crate::logging;
use crate::state::FlowState;

/// Resolves a node's `next` link against `state`.
///
/// Returns `None` when the node has no `next`. The result is not checked against the
/// graph; callers validate it.
pub fn resolve_next(node: &FlowNode, state: &FlowState) -> Option<PageId> {
    match node.next.as_ref()? {
        NextPage::Page(page) => Some(page.clone()),
        NextPage::Dynamic(f) => f(state),
    }
}

impl FlowGraph {
    /// True if `page` is registered and its skip rule holds for `state`.
    pub fn should_skip(&self, page: &str, state: &FlowState) -> bool {
        self.node(page).map(|n| n.skips(state)).unwrap_or(false)
    }

    /// First non-skipped page reachable from `page` by following `next`.
    ///
    /// Returns `page` itself when it is not skipped. Returns `None` on a dangling link, an
    /// unknown starting page, or when a page is revisited within this chain.
    pub fn next_non_skipped(
        &self,
        page: &str,
        state: &FlowState,
        visited: &mut HashSet<PageId>,
    ) -> Option<PageId> {
        let mut page = page.to_string();
        loop {
            if !visited.insert(page.clone()) {
                logging::log_skip_cycle(&page);
                return None;
            }
            let node = self.node(&page)?;
            if !node.skips(state) {
                return Some(page);
            }
            let next = resolve_next(node, state)?;
            if !self.contains(&next) {
                logging::log_dangling_next(&page, &next);
                return None;
            }
            page = next;
        }
    }

    /// Next page after `page`, with skipped pages bypassed.
    pub fn next_page(&self, page: &str, state: &FlowState) -> Option<PageId> {
        let node = self.node(page)?;
        let next = resolve_next(node, state)?;
        if !self.contains(&next) {
            logging::log_dangling_next(page, &next);
            return None;
        }
        self.next_non_skipped(&next, state, &mut HashSet::new())
    }

    /// All pages reachable in one forward step (zero or one).
    pub fn all_next_pages(&self, page: &str, state: &FlowState) -> Vec<PageId> {
        self.next_page(page, state).into_iter().collect()
    }

    /// First non-skipped page reachable from `page` by following `previous_fallback`.
    ///
    /// Unlike the forward chain this never returns `page` itself: it starts from the
    /// page's fallback and keeps walking back while the fallback is skipped.
    pub fn previous_non_skipped(
        &self,
        page: &str,
        state: &FlowState,
        visited: &mut HashSet<PageId>,
    ) -> Option<PageId> {
        let mut page = page.to_string();
        loop {
            if !visited.insert(page.clone()) {
                logging::log_skip_cycle(&page);
                return None;
            }
            let fallback = self.node(&page)?.previous_fallback.as_deref()?;
            if !self.contains(fallback) {
                logging::log_dangling_previous(&page, fallback);
                return None;
            }
            if !self.should_skip(fallback, state) {
                return Some(fallback.to_string());
            }
            page = fallback.to_string();
        }
    }

    /// Previous page before `page`, with skipped fallbacks bypassed.
    pub fn previous_page(&self, page: &str, state: &FlowState) -> Option<PageId> {
        self.previous_non_skipped(page, state, &mut HashSet::new())
    }
}
