//! Graph construction: fatal configuration errors and the validation report.

use maestro::{FlowError, FlowGraph, FlowNode, ValidationIssue};

/// **Scenario**: Two nodes sharing a page id fail construction with a duplicate error.
#[test]
fn duplicate_page_fails_construction() {
    let result = FlowGraph::from_nodes(
        [FlowNode::new("a").with_next("b"), FlowNode::new("a")],
        None,
    );
    match result {
        Err(FlowError::DuplicateNode(page)) => assert_eq!(page, "a"),
        other => panic!("expected DuplicateNode, got {:?}", other.map(|g| g.len())),
    }
}

#[test]
fn unknown_entry_point_fails_construction() {
    let result = FlowGraph::from_nodes([FlowNode::new("a")], Some("zzz"));
    assert_eq!(
        result.err(),
        Some(FlowError::UnknownEntryPoint("zzz".into()))
    );
}

/// **Scenario**: Dangling links are reported, not fatal; dynamic next is not checked.
#[test]
fn validate_reports_dangling_links() {
    let graph = FlowGraph::from_nodes(
        [
            FlowNode::new("a").with_next("ghost"),
            FlowNode::new("b").with_previous("phantom"),
            FlowNode::new("c").with_next_fn(|_| Some("anywhere".into())),
        ],
        None,
    )
    .unwrap();
    let report = graph.validate();
    assert!(!report.valid);
    assert_eq!(report.errors.len(), 2);
    assert!(report.errors.contains(&ValidationIssue::UnknownNext {
        page: "a".into(),
        target: "ghost".into(),
    }));
    assert!(report.errors.contains(&ValidationIssue::UnknownPrevious {
        page: "b".into(),
        target: "phantom".into(),
    }));
}

#[test]
fn signup_graph_is_valid_and_ordered() {
    let graph = crate::common::signup_graph();
    assert!(graph.validate().valid);
    let order = graph.pages_in_order();
    assert_eq!(order.len(), graph.len());
    assert_eq!(order.first().map(String::as_str), Some("welcome"));
}
