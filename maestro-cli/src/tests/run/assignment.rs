//! Unit tests for [`StateAssignment`](crate::run::StateAssignment) parsing.

use serde_json::json;

use crate::run::{AssignmentError, StateAssignment};

/// **Scenario**: JSON values are parsed, anything else is kept as a string.
#[test]
fn parses_json_or_string_values() {
    let a: StateAssignment = "welcome.returning=true".parse().unwrap();
    assert_eq!(a.page, "welcome");
    assert_eq!(a.key, "returning");
    assert_eq!(a.value, json!(true));

    let b: StateAssignment = "details.plan=pro".parse().unwrap();
    assert_eq!(b.value, json!("pro"));

    let c: StateAssignment = r#"details.tags=["a",1]"#.parse().unwrap();
    assert_eq!(c.value, json!(["a", 1]));
}

#[test]
fn value_may_contain_equals_sign() {
    let a: StateAssignment = "p.k=a=b".parse().unwrap();
    assert_eq!(a.value, json!("a=b"));
}

/// **Scenario**: Missing separators or empty names are rejected.
#[test]
fn malformed_assignments_are_rejected() {
    for raw in ["nokey=1", "page.key", ".key=1", "page.=1"] {
        assert_eq!(
            raw.parse::<StateAssignment>(),
            Err(AssignmentError::Malformed(raw.to_string()))
        );
    }
}
