//! Navigation operations. User-initiated moves push a history entry; skips replace.

use crate::flow::{Flow, Transition};
use crate::graph::resolve_next;
use crate::logging;

impl Flow {
    /// Moves to the next non-skipped page.
    ///
    /// When pages are bypassed on the way the URL is replaced, so history holds no entry
    /// for the skipped page; otherwise a new entry is pushed. No-op without a current page
    /// or next page.
    pub fn go_to_next(&mut self) -> Vec<Transition> {
        let Some(current) = self.current_page.clone() else {
            return Vec::new();
        };
        let state = self.state();
        let Some(next) = self.graph.next_page(&current, &state) else {
            return Vec::new();
        };
        let direct = self
            .graph
            .node(&current)
            .and_then(|node| resolve_next(node, &state));
        let skipping = direct.is_some_and(|d| d != next);
        if skipping {
            self.urls.replace_param(&self.config.page_param, &next);
        } else {
            self.urls.set_param(&self.config.page_param, &next);
        }
        let mut out = Vec::new();
        self.adopt(&mut out, next);
        out.extend(self.reconcile());
        out
    }

    /// Steps history back and lets reconciliation follow the URL. No-op at the first
    /// history entry.
    pub fn go_to_previous(&mut self) -> Vec<Transition> {
        if !self.urls.back() {
            return Vec::new();
        }
        self.reconcile()
    }

    /// Jumps to `page`, pushing a history entry. Unknown pages are logged and ignored.
    pub fn go_to_page(&mut self, page: &str) -> Vec<Transition> {
        self.jump(page, true)
    }

    /// Jumps to `page`, replacing the current history entry.
    pub fn skip_to_page(&mut self, page: &str) -> Vec<Transition> {
        self.jump(page, false)
    }

    /// Leaves the current page for its skip-resolved next page regardless of its own
    /// skip rule. The URL is replaced.
    pub fn skip_current_page(&mut self) -> Vec<Transition> {
        let Some(current) = self.current_page.clone() else {
            return Vec::new();
        };
        let state = self.state();
        let mut out = Vec::new();
        self.is_checking_skip = true;
        let moved = self.replace_with_next(&mut out, &current, &state);
        self.is_checking_skip = false;
        if moved {
            out.extend(self.reconcile());
        }
        out
    }

    fn jump(&mut self, page: &str, push: bool) -> Vec<Transition> {
        if !self.graph.contains(page) {
            logging::log_unknown_page(page);
            return Vec::new();
        }
        if push {
            self.urls.set_param(&self.config.page_param, page);
        } else {
            self.urls.replace_param(&self.config.page_param, page);
        }
        let mut out = Vec::new();
        self.adopt(&mut out, page.to_string());
        out.extend(self.reconcile());
        out
    }
}
