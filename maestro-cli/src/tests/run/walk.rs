//! Unit tests for [`walk`](crate::run::walk) over the sample flow.

use crate::config::RunConfig;
use crate::run::{walk, StateAssignment};

fn assignments(raw: &[&str]) -> Vec<StateAssignment> {
    raw.iter().map(|s| s.parse().unwrap()).collect()
}

fn pages(report: &crate::run::WalkReport) -> Vec<String> {
    report
        .transitions
        .iter()
        .filter_map(|t| t.page.clone())
        .collect()
}

/// **Scenario**: A plain walk visits every page on the default path and pushes each step.
#[test]
fn walk_default_path() {
    let path = crate::tests::signup_flow_path();
    let report = walk(&path, &RunConfig::default(), &[], 100).unwrap();
    assert_eq!(pages(&report), vec!["welcome", "details", "review"]);
    assert_eq!(report.final_page.as_deref(), Some("review"));
    assert!(report.final_url.contains("page=review"));
    assert_eq!(report.history_len, 3);
    assert_eq!(report.session_id.len(), 5);
}

/// **Scenario**: Assignments steer the walk through conditional next links.
#[test]
fn walk_with_pro_plan_visits_extras() {
    let path = crate::tests::signup_flow_path();
    let report = walk(
        &path,
        &RunConfig::default(),
        &assignments(&["details.plan=pro"]),
        100,
    )
    .unwrap();
    assert_eq!(pages(&report), vec!["welcome", "details", "extras", "review"]);
}

/// **Scenario**: Returning users skip details; the skip replaces history instead of pushing.
#[test]
fn walk_returning_user_skips_details() {
    let path = crate::tests::signup_flow_path();
    let report = walk(
        &path,
        &RunConfig::default(),
        &assignments(&["welcome.returning=true"]),
        100,
    )
    .unwrap();
    assert_eq!(pages(&report), vec!["welcome", "review"]);
    assert_eq!(report.history_len, 1);
}

#[test]
fn walk_respects_step_limit() {
    let path = crate::tests::signup_flow_path();
    let report = walk(&path, &RunConfig::default(), &[], 1).unwrap();
    assert_eq!(report.final_page.as_deref(), Some("details"));
}

/// **Scenario**: Starting mid-flow without a stored session ends on the expired page.
#[test]
fn walk_mid_flow_without_session_is_expired() {
    let path = crate::tests::signup_flow_path();
    let config = RunConfig {
        start_url: "http://localhost/?id=abcde&page=review".into(),
        ..RunConfig::default()
    };
    let report = walk(&path, &config, &[], 100).unwrap();
    assert_eq!(report.final_page.as_deref(), Some(maestro::EXPIRED_PAGE));
}

/// **Scenario**: With a state directory, a second walk resumes the stored session.
///
/// Given: a first walk that bootstraps session `abcde` into files  
/// When: a second walk starts at a mid-flow page with the same id  
/// Then: the page is adopted instead of expiring
#[test]
fn walk_with_state_dir_resumes_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = crate::tests::signup_flow_path();
    let mut config = RunConfig {
        start_url: "http://localhost/?id=abcde".into(),
        state_dir: Some(dir.path().to_path_buf()),
        ..RunConfig::default()
    };
    walk(&path, &config, &[], 0).unwrap();
    assert!(dir.path().join("flow%3Aabcde.json").exists());

    config.start_url = "http://localhost/?id=abcde&page=review".into();
    let report = walk(&path, &config, &[], 0).unwrap();
    assert_eq!(report.final_page.as_deref(), Some("review"));
}

#[test]
fn walk_without_state_never_expires() {
    let path = crate::tests::signup_flow_path();
    let config = RunConfig {
        start_url: "http://localhost/?page=review".into(),
        enable_state: false,
        ..RunConfig::default()
    };
    let report = walk(&path, &config, &[], 100).unwrap();
    assert_eq!(report.final_page.as_deref(), Some("review"));
}
