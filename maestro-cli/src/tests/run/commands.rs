//! Unit tests for [`validate`](crate::run::validate) and [`order`](crate::run::order).

use std::io::Write;

use maestro::ValidationIssue;

use crate::run::{order, validate};

fn write_flow(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

/// **Scenario**: The sample flow is valid and ordered from its entry point.
#[test]
fn sample_flow_validates_and_orders() {
    let path = crate::tests::signup_flow_path();
    assert!(validate(&path).unwrap().valid);
    assert_eq!(
        order(&path).unwrap(),
        vec!["welcome", "details", "extras", "review"]
    );
}

/// **Scenario**: A dangling previous link is reported without failing the command.
///
/// Given: a flow whose page `b` falls back to an unknown page  
/// When: validate is called  
/// Then: the report is invalid with one UnknownPrevious issue
#[test]
fn dangling_previous_is_reported() {
    let file = write_flow(
        r#"{ "nodes": [ { "page": "a", "next": "b" }, { "page": "b", "previous": "ghost" } ] }"#,
    );
    let report = validate(file.path()).unwrap();
    assert!(!report.valid);
    assert_eq!(
        report.errors,
        vec![ValidationIssue::UnknownPrevious {
            page: "b".into(),
            target: "ghost".into(),
        }]
    );
}

#[test]
fn unknown_entry_fails_command() {
    let file = write_flow(r#"{ "entry": "zzz", "nodes": [ { "page": "a" } ] }"#);
    let err = validate(file.path()).unwrap_err();
    assert!(err.to_string().contains("zzz"), "{}", err);
}
