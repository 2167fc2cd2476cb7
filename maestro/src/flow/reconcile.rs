//! Reconciliation: derives the current page from the URL, the session and the state.
//!
//! A pass runs, in order: session-id sync, then initial validation (first pass only) or
//! steady-state URL reconciliation, then the skip bypass for the settled page. Passes
//! repeat until one changes nothing. Every system correction to the URL is a replace;
//! only falling back to the entry point on an empty page parameter pushes.

use crate::flow::{Flow, Transition};
use crate::graph::{is_sentinel, PageId, EXPIRED_PAGE, NOT_FOUND_PAGE};
use crate::logging;
use crate::state::FlowState;

/// Passes beyond the node count before reconciliation gives up.
const EXTRA_PASSES: usize = 4;

impl Flow {
    /// Settles the current page against the URL and state.
    ///
    /// Returns the transitions produced, each also delivered to the change handler.
    /// Idempotent: calling it again without an external change returns nothing.
    pub fn reconcile(&mut self) -> Vec<Transition> {
        let mut out = Vec::new();
        let max_passes = self.graph.len() + EXTRA_PASSES;
        for _ in 0..max_passes {
            if !self.reconcile_pass(&mut out) {
                break;
            }
        }
        out
    }

    fn reconcile_pass(&mut self, out: &mut Vec<Transition>) -> bool {
        let mut changed = self.sync_session_id();
        if self.is_validating {
            self.validate_initial(out);
            changed = true;
        } else {
            changed |= self.reconcile_url(out);
        }
        changed |= self.bypass_skipped(out);
        changed
    }

    pub(super) fn url_page(&self) -> Option<PageId> {
        self.urls
            .get_param(&self.config.page_param)
            .filter(|p| !p.is_empty())
    }

    /// Follows a session id edited in the URL, or writes ours back when it is missing.
    fn sync_session_id(&mut self) -> bool {
        match self.urls.get_param(&self.config.session_param) {
            Some(id) if !id.is_empty() => {
                if id == self.session_id {
                    return false;
                }
                self.session_id = id;
                self.bootstrapped = false;
                self.state_version += 1;
                true
            }
            _ => {
                self.urls
                    .replace_param(&self.config.session_param, &self.session_id);
                false
            }
        }
    }

    /// First resolution after mount. Emits exactly one transition with no previous page.
    fn validate_initial(&mut self, out: &mut Vec<Transition>) {
        let url_page = self.url_page();
        let entry = self.graph.entry_point().map(str::to_string);
        let resolved = match url_page {
            None => entry,
            Some(page) if entry.as_deref() == Some(page.as_str()) => Some(page),
            Some(page) if !self.graph.contains(&page) => Some(NOT_FOUND_PAGE.to_string()),
            Some(_) if !self.source.session_exists(&self.session_id) => {
                Some(EXPIRED_PAGE.to_string())
            }
            Some(page) => Some(page),
        };
        self.is_validating = false;
        self.current_page = resolved.clone();
        self.emit(out, resolved, None);
    }

    /// Steady-state reaction to the URL's page parameter.
    fn reconcile_url(&mut self, out: &mut Vec<Transition>) -> bool {
        let url_page = self.url_page();
        let entry = self.graph.entry_point().map(str::to_string);
        let is_entry = url_page.is_some() && url_page == entry;
        let session_exists = self.source.session_exists(&self.session_id);

        if let Some(page) = &url_page {
            if !self.graph.contains(page) {
                return self.adopt_sentinel(out, NOT_FOUND_PAGE);
            }
            if !session_exists && !is_entry {
                return self.adopt_sentinel(out, EXPIRED_PAGE);
            }
        }

        if self.current_page.as_deref().is_some_and(is_sentinel) {
            return match url_page {
                Some(page) => {
                    self.adopt(out, page);
                    true
                }
                None => false,
            };
        }

        let mut changed = self.bootstrap_session(session_exists, url_page.is_none() || is_entry);

        let current = self.current_page.clone();
        match url_page {
            Some(page) if current.as_ref() != Some(&page) => {
                let state = self.state();
                if self.graph.should_skip(&page, &state) {
                    changed |= self.resolve_skipped_url_page(out, current.as_deref(), &page, &state);
                } else {
                    self.adopt(out, page);
                    changed = true;
                }
            }
            Some(_) => {}
            None => match entry {
                Some(entry) if current.as_ref() != Some(&entry) => {
                    self.urls.set_param(&self.config.page_param, &entry);
                    self.adopt(out, entry);
                    changed = true;
                }
                Some(_) => {}
                None => {
                    if let Some(previous) = self.current_page.take() {
                        self.emit(out, None, Some(previous));
                        changed = true;
                    }
                }
            },
        }
        changed
    }

    fn adopt_sentinel(&mut self, out: &mut Vec<Transition>, sentinel: &str) -> bool {
        if self.current_page.as_deref() == Some(sentinel) {
            return false;
        }
        self.adopt(out, sentinel.to_string());
        true
    }

    /// Pre-registers every page once per session, when the flow starts at its entry.
    fn bootstrap_session(&mut self, session_exists: bool, at_entry: bool) -> bool {
        if self.bootstrapped {
            return false;
        }
        if !self.source.is_persistent() || session_exists {
            self.bootstrapped = true;
            return false;
        }
        if !at_entry {
            return false;
        }
        let added = self.source.pre_register(&self.graph, &self.session_id);
        logging::log_session_bootstrap(&self.session_id, added);
        self.bootstrapped = true;
        self.state_version += 1;
        true
    }

    /// The URL names a skip-flagged page: continue backward when the user is going back
    /// from the current page, forward otherwise. The URL is corrected by replace.
    fn resolve_skipped_url_page(
        &mut self,
        out: &mut Vec<Transition>,
        current: Option<&str>,
        page: &str,
        state: &FlowState,
    ) -> bool {
        let target = if self.is_going_back(current, page, state) {
            self.graph.previous_page(page, state)
        } else {
            self.graph.next_page(page, state)
        };
        let Some(target) = target else {
            return false;
        };
        self.urls.replace_param(&self.config.page_param, &target);
        if current != Some(target.as_str()) {
            self.is_checking_skip = true;
            self.adopt(out, target);
            self.is_checking_skip = false;
        }
        true
    }

    /// Backward when `page` is the current page's previous, either its declared
    /// fallback or the skip-resolved previous page.
    fn is_going_back(&self, current: Option<&str>, page: &str, state: &FlowState) -> bool {
        let Some(current) = current else {
            return false;
        };
        let declared = self
            .graph
            .node(current)
            .and_then(|n| n.previous_fallback.as_deref());
        declared == Some(page) || self.graph.previous_page(current, state).as_deref() == Some(page)
    }

    /// Moves off the current page when its skip rule holds. A dangling or cyclic chain
    /// leaves everything unchanged.
    fn bypass_skipped(&mut self, out: &mut Vec<Transition>) -> bool {
        let Some(current) = self.current_page.clone() else {
            return false;
        };
        let state = self.state();
        if !self.graph.should_skip(&current, &state) {
            return false;
        }
        self.is_checking_skip = true;
        let moved = self.replace_with_next(out, &current, &state);
        self.is_checking_skip = false;
        moved
    }

    /// Replaces the URL's page with the skip-resolved next page of `page` and adopts it.
    pub(super) fn replace_with_next(
        &mut self,
        out: &mut Vec<Transition>,
        page: &str,
        state: &FlowState,
    ) -> bool {
        match self.graph.next_page(page, state) {
            Some(next) => {
                self.urls.replace_param(&self.config.page_param, &next);
                self.adopt(out, next);
                true
            }
            None => false,
        }
    }
}
