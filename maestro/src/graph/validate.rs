//! Static graph validation.
//!
//! Reports references to pages that are not registered. Dynamic `next` links cannot be
//! checked statically and are ignored. Never fails; the report carries a validity flag.

use std::fmt;

use crate::graph::flow_graph::FlowGraph;
use crate::graph::node::PageId;

/// One problem found by [`FlowGraph::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    UnknownEntryPoint(PageId),
    UnknownPrevious { page: PageId, target: PageId },
    UnknownNext { page: PageId, target: PageId },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::UnknownEntryPoint(page) => {
                write!(f, "Entry point \"{}\" does not exist in graph", page)
            }
            ValidationIssue::UnknownPrevious { page, target } => write!(
                f,
                "Node \"{}\" references non-existent previous page \"{}\"",
                page, target
            ),
            ValidationIssue::UnknownNext { page, target } => write!(
                f,
                "Node \"{}\" references non-existent next page \"{}\"",
                page, target
            ),
        }
    }
}

/// Result of [`FlowGraph::validate`]. `valid` is true iff `errors` is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<ValidationIssue>,
}

impl FlowGraph {
    /// Checks the entry point, every `previous_fallback` and every literal `next`.
    ///
    /// Issues are listed in registration order.
    pub fn validate(&self) -> ValidationReport {
        let mut errors = Vec::new();
        if let Some(entry) = self.entry_point() {
            if !self.contains(entry) {
                errors.push(ValidationIssue::UnknownEntryPoint(entry.to_string()));
            }
        }
        for page in self.pages() {
            let Some(node) = self.node(page) else {
                continue;
            };
            if let Some(prev) = &node.previous_fallback {
                if !self.contains(prev) {
                    errors.push(ValidationIssue::UnknownPrevious {
                        page: page.to_string(),
                        target: prev.clone(),
                    });
                }
            }
            if let Some(next) = node.next.as_ref().and_then(|n| n.literal()) {
                if !self.contains(next) {
                    errors.push(ValidationIssue::UnknownNext {
                        page: page.to_string(),
                        target: next.to_string(),
                    });
                }
            }
        }
        ValidationReport {
            valid: errors.is_empty(),
            errors,
        }
    }
}
