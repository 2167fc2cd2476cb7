//! The flow over path-segment parameters (`/wizard/[id]/page/[page]`).

use std::sync::Arc;

use maestro::{
    BrowserHistory, Flow, FlowConfig, MemoryBackend, PathConfig, PathParamsAdapter,
    UrlParamsAdapter, NOT_FOUND_PAGE,
};
use serde_json::json;

use crate::common::abc_graph;

fn path_flow(href: &str) -> (Arc<BrowserHistory>, Arc<PathParamsAdapter>, Flow) {
    let history = Arc::new(BrowserHistory::new(href).unwrap());
    let adapter = Arc::new(
        PathParamsAdapter::new(
            history.clone(),
            &PathConfig {
                template: "/[id]/page/[page]".into(),
                base_path: Some("/wizard".into()),
            },
        )
        .unwrap(),
    );
    let flow = Flow::new(
        Arc::new(abc_graph()),
        FlowConfig::default(),
        adapter.clone(),
        Arc::new(MemoryBackend::new()),
    );
    (history, adapter, flow)
}

/// **Scenario**: A bare base path gets a session id segment and starts at the entry point.
#[test]
fn bare_path_starts_at_entry() {
    let (history, adapter, mut flow) = path_flow("http://localhost/wizard");
    flow.reconcile();
    assert_eq!(flow.current_page(), Some("a"));
    assert_eq!(adapter.get_param("id").as_deref(), Some(flow.session_id()));
    assert_eq!(history.len(), 1);
}

/// **Scenario**: Navigation writes the page segment; skips replace it.
#[test]
fn navigation_writes_page_segment() {
    let (history, _, mut flow) = path_flow("http://localhost/wizard/s1/page/a");
    flow.reconcile();
    flow.go_to_next();
    assert_eq!(history.current().path(), "/wizard/s1/page/b");
    assert_eq!(history.len(), 2);
    flow.update_state("skip", json!(true));
    assert_eq!(flow.current_page(), Some("c"));
    assert_eq!(history.current().path(), "/wizard/s1/page/c");
    assert_eq!(history.len(), 2);
}

#[test]
fn unknown_page_segment_is_not_found() {
    let (_, _, mut flow) = path_flow("http://localhost/wizard/s1/page/zzz");
    flow.reconcile();
    assert_eq!(flow.current_page(), Some(NOT_FOUND_PAGE));
}
