//! Walk: run a flow file through the reconciler in a simulated browser.
//!
//! Starts at the configured URL, reconciles, then repeatedly fills in the current page's
//! assignments and moves to the next page until there is none or the step limit is hit.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use maestro::{
    BrowserHistory, FileBackend, Flow, MemoryBackend, PageId, QueryParamsAdapter,
    StorageBackend, Transition,
};
use serde::Serialize;

use crate::config::{Error, RunConfig};
use crate::definition::FlowFile;
use crate::run::StateAssignment;

/// Outcome of a walk.
#[derive(Debug, Clone, Serialize)]
pub struct WalkReport {
    pub session_id: String,
    pub transitions: Vec<Transition>,
    pub final_page: Option<PageId>,
    pub final_url: String,
    pub history_len: usize,
}

/// Walks the flow in `path` for at most `steps` forward moves.
pub fn walk(
    path: &Path,
    config: &RunConfig,
    assignments: &[StateAssignment],
    steps: usize,
) -> Result<WalkReport, Error> {
    let graph = FlowFile::load(path)?.into_graph()?;
    let history = Arc::new(BrowserHistory::new(&config.start_url)?);
    let urls = Arc::new(QueryParamsAdapter::new(history.clone()));
    let backend: Arc<dyn StorageBackend> = match &config.state_dir {
        Some(dir) => Arc::new(FileBackend::new(dir.clone())),
        None => Arc::new(MemoryBackend::new()),
    };
    let mut flow = Flow::new(Arc::new(graph), config.flow_config(), urls, backend);
    tracing::debug!(url = %config.start_url, session = flow.session_id(), "Walk started");

    let mut transitions = flow.reconcile();
    let mut filled: HashSet<PageId> = HashSet::new();
    let mut taken = 0;
    loop {
        if let Some(page) = flow.current_page().map(str::to_string) {
            if filled.insert(page.clone()) {
                for a in assignments.iter().filter(|a| a.page == page) {
                    transitions.extend(flow.update_state(&a.key, a.value.clone()));
                }
            }
        }
        if taken >= steps || !flow.has_next() {
            break;
        }
        let moved = flow.go_to_next();
        if moved.is_empty() {
            break;
        }
        transitions.extend(moved);
        taken += 1;
    }

    tracing::debug!(
        session = flow.session_id(),
        steps = taken,
        transitions = transitions.len(),
        "Walk finished"
    );
    Ok(WalkReport {
        session_id: flow.session_id().to_string(),
        transitions,
        final_page: flow.current_page().map(str::to_string),
        final_url: history.location(),
        history_len: history.len(),
    })
}
