//! Commands: validate a flow file, print its page order, walk it through the reconciler.
//!
//! Re-exports [`walk`], [`WalkReport`], [`StateAssignment`] and [`Error`].

pub use crate::config::Error;

mod assignment;
mod walk;

use std::path::Path;

use maestro::{PageId, ValidationReport};

use crate::definition::FlowFile;

pub use assignment::{AssignmentError, StateAssignment};
pub use walk::{walk, WalkReport};

/// Loads the flow file and checks its static references.
pub fn validate(path: &Path) -> Result<ValidationReport, Error> {
    let graph = FlowFile::load(path)?.into_graph()?;
    Ok(graph.validate())
}

/// Loads the flow file and returns its pages in natural order.
pub fn order(path: &Path) -> Result<Vec<PageId>, Error> {
    let graph = FlowFile::load(path)?.into_graph()?;
    Ok(graph.pages_in_order())
}
