//! History accounting for navigation operations: pushes for user moves, replaces for
//! corrections.

use serde_json::json;

use crate::common::{abc_graph, Harness};

/// **Scenario**: A full forward walk pushes one entry per step; back walks them in reverse.
#[test]
fn forward_walk_then_back() {
    let h = Harness::new("http://localhost/?id=s1&page=a");
    let mut flow = h.flow(abc_graph());
    flow.reconcile();
    flow.go_to_next();
    flow.go_to_next();
    assert_eq!(flow.current_page(), Some("c"));
    assert_eq!(h.history.len(), 3);
    assert!(!flow.has_next());

    flow.go_to_previous();
    assert_eq!(flow.current_page(), Some("b"));
    flow.go_to_previous();
    assert_eq!(flow.current_page(), Some("a"));
    assert_eq!(h.history.index(), 0);
}

/// **Scenario**: Going back to an entry without a page parameter pushes the entry point.
#[test]
fn back_to_bare_url_pushes_entry_point() {
    let h = Harness::new("http://localhost/?id=s1");
    let mut flow = h.flow(abc_graph());
    flow.reconcile();
    flow.go_to_next();
    flow.go_to_previous();
    assert_eq!(flow.current_page(), Some("a"));
    assert_eq!(h.url_page().as_deref(), Some("a"));
    assert_eq!(h.history.index(), 1);
}

/// **Scenario**: The handler receives exactly the transitions the operations return.
#[test]
fn handler_sees_returned_transitions() {
    let h = Harness::new("http://localhost/?id=s1");
    let mut flow = h.flow(abc_graph());
    let mut returned = flow.reconcile();
    returned.extend(flow.go_to_next());
    returned.extend(flow.go_to_page("a"));
    returned.extend(flow.skip_to_page("c"));
    let seen = h.seen.lock().unwrap().clone();
    assert_eq!(seen, returned);
    assert_eq!(seen.len(), 4);
}

/// **Scenario**: Transitions carry the aggregate state at the time of the change.
#[test]
fn transition_carries_state_snapshot() {
    let h = Harness::new("http://localhost/?id=s1");
    let mut flow = h.flow(abc_graph());
    flow.reconcile();
    flow.update_state("name", json!("ann"));
    let transitions = flow.go_to_next();
    let state = &transitions[0].state;
    assert_eq!(maestro::field(state, "a", "name"), Some(&json!("ann")));
}

#[test]
fn go_to_page_unknown_is_ignored() {
    let h = Harness::new("http://localhost/?id=s1");
    let mut flow = h.flow(abc_graph());
    flow.reconcile();
    let len = h.history.len();
    assert!(flow.go_to_page("missing").is_empty());
    assert!(flow.skip_to_page("missing").is_empty());
    assert_eq!(h.history.len(), len);
    assert_eq!(flow.current_page(), Some("a"));
}

/// **Scenario**: skip_current_page replaces and lands on the next page.
#[test]
fn skip_current_page_replaces() {
    let h = Harness::new("http://localhost/?id=s1");
    let mut flow = h.flow(abc_graph());
    flow.reconcile();
    let transitions = flow.skip_current_page();
    assert_eq!(transitions.len(), 1);
    assert_eq!(flow.current_page(), Some("b"));
    assert_eq!(h.history.len(), 1);
    assert_eq!(h.url_page().as_deref(), Some("b"));
}

/// **Scenario**: Browser forward after going back is followed like any URL change.
#[test]
fn browser_forward_is_reconciled() {
    let h = Harness::new("http://localhost/?id=s1&page=a");
    let mut flow = h.flow(abc_graph());
    flow.reconcile();
    flow.go_to_next();
    flow.go_to_previous();
    assert!(h.history.forward());
    let transitions = flow.reconcile();
    assert_eq!(transitions.len(), 1);
    assert_eq!(flow.current_page(), Some("b"));
}

#[test]
fn snapshot_after_settle() {
    let h = Harness::new("http://localhost/?id=s1");
    let mut flow = h.flow(abc_graph());
    assert!(flow.snapshot().is_validating);
    flow.reconcile();
    let snapshot = flow.snapshot();
    assert_eq!(snapshot.current_page.as_deref(), Some("a"));
    assert!(!snapshot.is_validating);
    assert!(!snapshot.is_checking_skip);
    assert_eq!(flow.url_params().get("id").map(String::as_str), Some("s1"));
}
