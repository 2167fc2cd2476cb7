//! State tracking disabled: in-memory fields, no session buckets, no expiry.

use serde_json::json;

use maestro::{FlowConfig, PageState};

use crate::common::{abc_graph, Harness};

fn memory_config(h: &Harness) -> FlowConfig {
    h.config().with_state(false)
}

/// **Scenario**: A mid-flow URL without any stored session is adopted, never expired.
#[test]
fn mid_flow_url_never_expires() {
    let h = Harness::new("http://localhost/?id=s1&page=c");
    let mut flow = h.flow_with(abc_graph(), memory_config(&h));
    flow.reconcile();
    assert_eq!(flow.current_page(), Some("c"));
    assert!(h.backend.is_empty());
}

/// **Scenario**: Writes live in memory and still drive skip rules.
#[test]
fn memory_state_drives_skips() {
    let h = Harness::new("http://localhost/?id=s1&page=b");
    let mut flow = h.flow_with(abc_graph(), memory_config(&h));
    flow.reconcile();
    let mut updates = PageState::new();
    updates.insert("skip".into(), json!(true));
    updates.insert("note".into(), json!("x"));
    flow.update_state_batch(updates);
    assert_eq!(flow.current_page(), Some("c"));
    assert_eq!(flow.page_state("b").get("note"), Some(&json!("x")));
    assert!(h.backend.is_empty());
}

#[test]
fn complete_flow_clears_memory() {
    let h = Harness::new("http://localhost/?id=s1&page=a");
    let mut flow = h.flow_with(abc_graph(), memory_config(&h));
    flow.reconcile();
    flow.update_state("k", json!(1));
    flow.complete_flow();
    assert!(flow.state().is_empty());
    assert_eq!(flow.current_page(), Some("a"));
    h.history.navigate("?id=s1&page=c").unwrap();
    flow.reconcile();
    assert_eq!(flow.current_page(), Some("c"));
}

#[test]
fn state_up_to_truncates_in_order() {
    let h = Harness::new("http://localhost/?id=s1&page=a");
    let mut flow = h.flow_with(abc_graph(), memory_config(&h));
    flow.reconcile();
    flow.update_state("k", json!(1));
    flow.go_to_page("c");
    flow.update_state("k", json!(3));
    let up_to_b = flow.state_up_to("b");
    assert_eq!(up_to_b.keys().collect::<Vec<_>>(), vec!["a"]);
    assert_eq!(flow.state().len(), 2);
}
