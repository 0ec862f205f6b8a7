//! Trigger dispatch specs

use crate::prelude::*;

fn tester_trigger(url: &str) -> String {
    serde_json::json!({
        "scheduler": "Julia CI (linux64 testing)",
        "properties": {
            "url": url,
            "shortcommit": "abc1234567",
            "branch": "master",
        }
    })
    .to_string()
}

#[test]
fn coverage_trigger_is_rejected() {
    let project = Project::configured();
    project.file(
        "triggers/coverage.json",
        r#"{"scheduler": "Julia Coverage Testing", "properties": {}}"#,
    );
    project
        .nb()
        .args(&["dispatch", "triggers/coverage.json"])
        .errors()
        .stderr_has("is not a tester trigger");
}

#[test]
fn unreadable_trigger_is_rejected() {
    let project = Project::configured();
    project.file("triggers/bad.json", "{ not json");
    project
        .nb()
        .args(&["dispatch", "triggers/bad.json"])
        .errors()
        .stderr_has("Cannot read trigger triggers/bad.json");
}

#[test]
fn trigger_without_url_is_rejected() {
    let project = Project::configured();
    project.file(
        "triggers/t.json",
        r#"{"scheduler": "Julia CI (linux64 testing)", "properties": {}}"#,
    );
    project
        .nb()
        .args(&["dispatch", "triggers/t.json"])
        .errors()
        .stderr_has("No artifact URL in trigger");
}

#[test]
fn failed_run_still_consumes_trigger() {
    let project = Project::configured();
    project.file("triggers/t.json", &tester_trigger(DEAD_URL));

    project
        .nb()
        .args(&["dispatch", "triggers/t.json", "--local", "--consume"])
        .run_fails()
        .stdout_has("tester linux64")
        .stdout_has("FAILED   download");

    assert!(!project.join("triggers/t.json").exists());
}

#[test]
fn trigger_is_kept_without_consume() {
    let project = Project::configured();
    project.file("triggers/t.json", &tester_trigger(DEAD_URL));

    project
        .nb()
        .args(&["dispatch", "triggers/t.json", "--local"])
        .run_fails();

    assert!(project.join("triggers/t.json").exists());
}
