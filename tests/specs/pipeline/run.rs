//! Pipeline run specs
//!
//! Runs here use `--local` and fail early, so nothing is built or published.

use crate::prelude::*;

#[test]
fn tester_halts_when_download_fails() {
    Project::configured()
        .nb()
        .args(&["test", "linux64", "--url", DEAD_URL, "--local"])
        .run_fails()
        .stdout_has(" clean workspace")
        .stdout_has("  FAILED   download")
        .stdout_has("  not run  extract")
        .stdout_has("  not run  run tests")
        .stdout_lacks("artifact:")
        .stdout_has("status: failure");
}

#[test]
fn tester_needs_url() {
    Project::configured()
        .nb()
        .args(&["test", "linux64", "--local"])
        .exits(2);
}

#[test]
fn packager_halts_when_checkout_fails() {
    Project::configured()
        .nb()
        .args(&[
            "package",
            "linux64",
            "--branch",
            "master",
            "--repository",
            "/nonexistent/julia",
            "--local",
        ])
        .run_fails()
        .stdout_has("  failed   git fetch")
        .stdout_has("  FAILED   checkout")
        .stdout_has("  not run  make cleanall")
        .stdout_has("status: failure");
}

#[test]
fn forced_branch_runs() {
    Project::configured()
        .nb()
        .args(&[
            "package",
            "linux64",
            "--branch",
            "feature/x",
            "--force",
            "--repository",
            "/nonexistent/julia",
            "--local",
        ])
        .run_fails()
        .stdout_has("FAILED   checkout");
}

#[test]
fn json_report() {
    let run = Project::configured()
        .nb()
        .args(&["--format", "json", "test", "linux64", "--url", DEAD_URL, "--local"])
        .run_fails();
    let report = run.json();
    assert_eq!(report["builder"], "linux64");
    assert_eq!(report["status"], "failure");
}

#[test]
fn log_dir_receives_a_log_file() {
    let project = Project::configured();
    project
        .nb()
        .args(&["--log-dir", "logs", "test", "linux64", "--url", DEAD_URL, "--local"])
        .run_fails();

    let logs: Vec<_> = std::fs::read_dir(project.join("logs"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].starts_with("nb-") && logs[0].ends_with(".log"));
}
