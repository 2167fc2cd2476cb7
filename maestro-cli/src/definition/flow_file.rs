//! Flow file format and conversion to a [`FlowGraph`].
//!
//! ```json
//! {
//!   "entry": "welcome",
//!   "nodes": [
//!     { "page": "welcome", "next": "details" },
//!     { "page": "details", "previous": "welcome", "next": "review",
//!       "next_when": [{ "page": "details", "key": "plan", "equals": "pro", "to": "extras" }],
//!       "skip_when": { "page": "welcome", "key": "returning", "equals": true } },
//!     { "page": "extras", "previous": "details", "next": "review" },
//!     { "page": "review", "previous": "details" }
//!   ]
//! }
//! ```
//!
//! A node with `next_when` rules gets a dynamic next link: the first matching rule wins,
//! otherwise `next` is used. Dynamic links are not checked by `validate`.

use std::path::{Path, PathBuf};

use maestro::{field, FlowError, FlowGraph, FlowNode, FlowState};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Error loading a flow file.
#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid flow file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Flow(#[from] FlowError),
}

/// Equality test on one field of one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub page: String,
    pub key: String,
    pub equals: Value,
}

impl Condition {
    pub fn holds(&self, state: &FlowState) -> bool {
        field(state, &self.page, &self.key) == Some(&self.equals)
    }
}

/// Conditional forward link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextRule {
    #[serde(flatten)]
    pub when: Condition,
    pub to: String,
}

/// One page in a flow file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSpec {
    pub page: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub next_when: Vec<NextRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_when: Option<Condition>,
}

impl NodeSpec {
    fn into_node(self) -> FlowNode {
        let mut node = FlowNode::new(self.page);
        if self.next_when.is_empty() {
            if let Some(next) = self.next {
                node = node.with_next(next);
            }
        } else {
            let rules = self.next_when;
            let fallback = self.next;
            node = node.with_next_fn(move |state| {
                rules
                    .iter()
                    .find(|rule| rule.when.holds(state))
                    .map(|rule| rule.to.clone())
                    .or_else(|| fallback.clone())
            });
        }
        if let Some(previous) = self.previous {
            node = node.with_previous(previous);
        }
        if let Some(condition) = self.skip_when {
            node = node.with_skip(move |state| condition.holds(state));
        }
        node
    }
}

/// Parsed flow file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
    pub nodes: Vec<NodeSpec>,
}

impl FlowFile {
    pub fn parse(text: &str) -> Result<Self, DefinitionError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, DefinitionError> {
        let text = std::fs::read_to_string(path).map_err(|source| DefinitionError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Builds the graph. Fails on duplicate pages or an unknown entry.
    pub fn into_graph(self) -> Result<FlowGraph, DefinitionError> {
        let entry = self.entry;
        let nodes = self.nodes.into_iter().map(NodeSpec::into_node);
        Ok(FlowGraph::from_nodes(nodes, entry.as_deref())?)
    }
}
