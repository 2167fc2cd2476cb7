//! Flow graph: registered nodes plus an entry point.
//!
//! Build with [`FlowGraph::register`] or [`FlowGraph::from_nodes`]; the graph is read-only
//! once handed to a [`Flow`](crate::flow::Flow). Dangling `next` / `previous_fallback`
//! references are not rejected here: [`FlowGraph::validate`] reports them, and traversal
//! treats them as dead ends.

use std::collections::HashMap;

use crate::error::FlowError;
use crate::graph::node::{FlowNode, PageId};

/// Directed graph of pages.
///
/// Lookup is by page id; registration order is kept for deterministic ordering
/// ([`FlowGraph::pages_in_order`]).
#[derive(Clone, Debug, Default)]
pub struct FlowGraph {
    pub(super) nodes: HashMap<PageId, FlowNode>,
    /// Page ids in registration order.
    pub(super) order: Vec<PageId>,
    pub(super) entry_point: Option<PageId>,
}

impl FlowGraph {
    /// Creates an empty graph with no entry point.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node. The first registered node becomes the entry point.
    ///
    /// Returns [`FlowError::DuplicateNode`] if the page id is already registered.
    pub fn register(&mut self, node: FlowNode) -> Result<&mut Self, FlowError> {
        if self.nodes.contains_key(&node.page) {
            return Err(FlowError::DuplicateNode(node.page));
        }
        if self.entry_point.is_none() {
            self.entry_point = Some(node.page.clone());
        }
        self.order.push(node.page.clone());
        self.nodes.insert(node.page.clone(), node);
        Ok(self)
    }

    /// Registers all nodes, then overrides the entry point when `entry_point` is given.
    ///
    /// Fails on the first duplicate page, or with [`FlowError::UnknownEntryPoint`] when the
    /// explicit entry point was not registered.
    pub fn from_nodes(
        nodes: impl IntoIterator<Item = FlowNode>,
        entry_point: Option<&str>,
    ) -> Result<Self, FlowError> {
        let mut graph = Self::new();
        for node in nodes {
            graph.register(node)?;
        }
        if let Some(entry) = entry_point {
            if !graph.nodes.contains_key(entry) {
                return Err(FlowError::UnknownEntryPoint(entry.to_string()));
            }
            graph.entry_point = Some(entry.to_string());
        }
        Ok(graph)
    }

    pub fn node(&self, page: &str) -> Option<&FlowNode> {
        self.nodes.get(page)
    }

    pub fn contains(&self, page: &str) -> bool {
        self.nodes.contains_key(page)
    }

    pub fn entry_point(&self) -> Option<&str> {
        self.entry_point.as_deref()
    }

    pub fn is_entry_point(&self, page: &str) -> bool {
        self.entry_point.as_deref() == Some(page)
    }

    /// Page ids in registration order.
    pub fn pages(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
