//! Flow definition files: JSON description of pages, links and skip conditions.
//!
//! Re-exports [`FlowFile`], [`NodeSpec`], [`Condition`], [`NextRule`] and [`DefinitionError`].

mod flow_file;

pub use flow_file::{Condition, DefinitionError, FlowFile, NextRule, NodeSpec};
