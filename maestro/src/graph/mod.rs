//! Flow graph: page nodes, next/previous resolution, validation and ordering.
//!
//! Build a [`FlowGraph`] from [`FlowNode`]s, then query it with pure functions. The graph
//! is immutable once shared with a [`Flow`](crate::flow::Flow).

mod flow_graph;
mod node;
mod order;
mod resolve;
mod validate;

pub use flow_graph::FlowGraph;
pub use node::{
    is_sentinel, FlowNode, NextPage, NextPageFn, PageId, SkipRule, EXPIRED_PAGE, NOT_FOUND_PAGE,
};
pub use resolve::resolve_next;
pub use validate::{ValidationIssue, ValidationReport};
