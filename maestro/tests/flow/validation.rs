//! Initial validation and steady-state error pages.

use maestro::{FlowGraph, FlowNode, StorageBackend, EXPIRED_PAGE, NOT_FOUND_PAGE};

use crate::common::{abc_graph, Harness};

/// **Scenario**: Page parameter not in the graph resolves to not-found.
#[test]
fn unknown_url_page_resolves_to_not_found() {
    let h = Harness::new("http://localhost/?id=s1&page=Z");
    let mut flow = h.flow(abc_graph());
    let transitions = flow.reconcile();
    assert_eq!(flow.current_page(), Some(NOT_FOUND_PAGE));
    assert_eq!(transitions.len(), 1);
    assert_eq!(transitions[0].previous, None);
}

/// **Scenario**: No bucket + entry page → entry page; no bucket + mid-flow page → expired.
#[test]
fn missing_session_expires_only_mid_flow() {
    let h = Harness::new("http://localhost/?id=s1&page=a");
    let mut flow = h.flow(abc_graph());
    flow.reconcile();
    assert_eq!(flow.current_page(), Some("a"));

    let h = Harness::new("http://localhost/?id=s1&page=c");
    let mut flow = h.flow(abc_graph());
    flow.reconcile();
    assert_eq!(flow.current_page(), Some(EXPIRED_PAGE));
}

/// **Scenario**: An existing bucket lets a mid-flow URL resume where it was.
#[test]
fn existing_session_resumes_mid_flow() {
    let h = Harness::new("http://localhost/?id=s1&page=c");
    h.seed_session(&abc_graph(), "s1");
    let mut flow = h.flow(abc_graph());
    flow.reconcile();
    assert_eq!(flow.current_page(), Some("c"));
    assert_eq!(h.seen_pages(), vec![Some("c".to_string())]);
}

/// **Scenario**: A fresh visit with no parameters generates a session and bootstraps it.
#[test]
fn fresh_visit_bootstraps_session() {
    let h = Harness::new("http://localhost/wizard");
    let mut flow = h.flow(abc_graph());
    flow.reconcile();
    assert_eq!(flow.current_page(), Some("a"));
    let key = format!("flow:{}", flow.session_id());
    let raw = h.backend.get_item(&key).unwrap().unwrap();
    let entries: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(h.history.len(), 1);
}

/// **Scenario**: Navigating the URL to an unknown page mid-flow moves to not-found once.
#[test]
fn steady_state_unknown_page_notifies_once() {
    let h = Harness::new("http://localhost/?id=s1&page=a");
    let mut flow = h.flow(abc_graph());
    flow.reconcile();
    h.history.navigate("?id=s1&page=nope").unwrap();
    let transitions = flow.reconcile();
    assert_eq!(transitions.len(), 1);
    assert_eq!(transitions[0].previous.as_deref(), Some("a"));
    assert!(flow.reconcile().is_empty());
    assert_eq!(flow.current_page(), Some(NOT_FOUND_PAGE));
}

/// **Scenario**: Clearing the session mid-flow expires the next URL change.
#[test]
fn completed_session_expires_on_next_navigation() {
    let h = Harness::new("http://localhost/?id=s1&page=a");
    let mut flow = h.flow(abc_graph());
    flow.reconcile();
    flow.go_to_next();
    flow.complete_flow();
    assert_eq!(flow.current_page(), Some("b"));
    h.history.navigate("?id=s1&page=c").unwrap();
    flow.reconcile();
    assert_eq!(flow.current_page(), Some(EXPIRED_PAGE));
}

/// **Scenario**: A graph without an entry point and no URL page starts at None.
#[test]
fn empty_graph_starts_at_none() {
    let h = Harness::new("http://localhost/?id=s1");
    let mut flow = h.flow(FlowGraph::new());
    let transitions = flow.reconcile();
    assert_eq!(flow.current_page(), None);
    assert_eq!(transitions.len(), 1);
    assert_eq!(transitions[0].page, None);
    assert!(!flow.has_next());
}

#[test]
fn explicit_entry_point_is_used() {
    let graph = FlowGraph::from_nodes(
        [FlowNode::new("intro").with_next("start"), FlowNode::new("start")],
        Some("start"),
    )
    .unwrap();
    let h = Harness::new("http://localhost/?id=s1");
    let mut flow = h.flow(graph);
    flow.reconcile();
    assert_eq!(flow.current_page(), Some("start"));
}
