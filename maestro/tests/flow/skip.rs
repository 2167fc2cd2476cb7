//! Skip handling: forward bypass, state-driven bypass and direction-aware URL edits.

use maestro::{FlowGraph, FlowNode, FlowState};
use serde_json::json;

use crate::common::{abc_graph, signup_graph, Harness};

/// **Scenario**: next page of A is B, then C once B's skip flag is set.
#[test]
fn next_page_follows_skip_flag() {
    let graph = abc_graph();
    let mut state = FlowState::new();
    assert_eq!(graph.next_page("a", &state).as_deref(), Some("b"));
    state
        .entry("b".into())
        .or_default()
        .insert("skip".into(), json!(true));
    assert_eq!(graph.next_page("a", &state).as_deref(), Some("c"));
}

/// **Scenario**: go_to_next from A over skipped B replaces the URL with C.
#[test]
fn go_to_next_over_skipped_page_replaces_url() {
    let h = Harness::new("http://localhost/?id=s1&page=b");
    h.seed_session(&abc_graph(), "s1");
    let mut flow = h.flow(abc_graph());
    flow.reconcile();
    assert_eq!(flow.current_page(), Some("b"));
    flow.update_state("skip", json!(true));
    assert_eq!(flow.current_page(), Some("c"));

    h.history.navigate("?id=s1&page=a").unwrap();
    flow.reconcile();
    assert_eq!(flow.current_page(), Some("a"));
    let len = h.history.len();
    let transitions = flow.go_to_next();
    assert_eq!(flow.current_page(), Some("c"));
    assert_eq!(h.url_page().as_deref(), Some("c"));
    assert_eq!(h.history.len(), len);
    assert_eq!(transitions.len(), 1);
    assert_eq!(transitions[0].previous.as_deref(), Some("a"));
}

/// **Scenario**: Dynamic next sends premium users through extras.
#[test]
fn dynamic_next_reads_state() {
    let h = Harness::new("http://localhost/?id=s1");
    let mut flow = h.flow(signup_graph());
    flow.reconcile();
    flow.go_to_next();
    assert_eq!(flow.current_page(), Some("details"));
    flow.update_state("userType", json!("premium"));
    flow.go_to_next();
    assert_eq!(flow.current_page(), Some("extras"));
    flow.go_to_previous();
    flow.update_state("userType", json!("basic"));
    flow.go_to_next();
    assert_eq!(flow.current_page(), Some("review"));
}

/// **Scenario**: Returning users skip details in both directions.
#[test]
fn returning_user_skips_details_both_ways() {
    let h = Harness::new("http://localhost/?id=s1");
    let mut flow = h.flow(signup_graph());
    flow.reconcile();
    flow.update_state("returning", json!(true));
    flow.go_to_next();
    assert_eq!(flow.current_page(), Some("review"));
    assert_eq!(h.history.len(), 1);

    // Browser "back" to the skipped page continues to welcome.
    h.history.navigate("?id=s1&page=details").unwrap();
    flow.reconcile();
    assert_eq!(flow.current_page(), Some("welcome"));
    assert_eq!(h.url_page().as_deref(), Some("welcome"));
}

/// **Scenario**: A skipped page with nowhere to go stays put without a transition.
#[test]
fn skipped_tail_is_a_degraded_no_op() {
    let graph = FlowGraph::from_nodes(
        [
            FlowNode::new("a").with_next("b"),
            FlowNode::new("b")
                .with_previous("a")
                .with_skip(|s| maestro::field(s, "a", "done") == Some(&json!(true))),
        ],
        None,
    )
    .unwrap();
    let h = Harness::new("http://localhost/?id=s1");
    let mut flow = h.flow(graph);
    flow.reconcile();
    flow.update_state("done", json!(true));
    assert!(!flow.has_next());
    assert!(flow.go_to_next().is_empty());
    assert_eq!(flow.current_page(), Some("a"));
}

/// **Scenario**: A cycle of skipped pages ends without looping.
#[test]
fn skip_cycle_terminates_in_flow() {
    let graph = FlowGraph::from_nodes(
        [
            FlowNode::new("a").with_next("b"),
            FlowNode::new("b").with_next("c").with_skip(|_| true),
            FlowNode::new("c").with_next("b").with_skip(|_| true),
        ],
        None,
    )
    .unwrap();
    let h = Harness::new("http://localhost/?id=s1&page=b");
    h.seed_session(&graph, "s1");
    let mut flow = h.flow(graph);
    let transitions = flow.reconcile();
    assert_eq!(transitions.len(), 1);
    assert_eq!(flow.current_page(), Some("b"));
}
