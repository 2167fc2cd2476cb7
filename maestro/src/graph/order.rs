//! Deterministic "natural" page order.
//!
//! Depth-first from the entry point: a page's `previous_fallback` is visited before the
//! page, its literal `next` after. Pages the walk never reaches follow in registration
//! order. Used to seed session buckets and to truncate state to completed pages.

use std::collections::HashSet;

use crate::graph::flow_graph::FlowGraph;
use crate::graph::node::PageId;

impl FlowGraph {
    /// Every registered page exactly once, in natural flow order.
    pub fn pages_in_order(&self) -> Vec<PageId> {
        let mut visited = HashSet::new();
        let mut result = Vec::with_capacity(self.len());
        if let Some(entry) = self.entry_point() {
            self.visit_in_order(entry, &mut visited, &mut result);
        }
        for page in self.pages() {
            if !visited.contains(page) {
                self.visit_in_order(page, &mut visited, &mut result);
            }
        }
        result
    }

    fn visit_in_order(&self, start: &str, visited: &mut HashSet<PageId>, out: &mut Vec<PageId>) {
        let mut stack = vec![Visit::Enter(start.to_string())];
        while let Some(visit) = stack.pop() {
            let page = match visit {
                Visit::Emit(page) => {
                    out.push(page);
                    continue;
                }
                Visit::Enter(page) => page,
            };
            if !visited.insert(page.clone()) {
                continue;
            }
            let Some(node) = self.node(&page) else {
                continue;
            };
            if let Some(next) = node.next.as_ref().and_then(|n| n.literal()) {
                stack.push(Visit::Enter(next.to_string()));
            }
            let prev = node.previous_fallback.clone();
            stack.push(Visit::Emit(page));
            if let Some(prev) = prev {
                stack.push(Visit::Enter(prev));
            }
        }
    }
}

/// Work item of the depth-first walk; popped in LIFO order.
enum Visit {
    Enter(PageId),
    Emit(PageId),
}
