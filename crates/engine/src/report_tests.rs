// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::stage::StageKind;

fn failed() -> StageOutcome {
    StageOutcome::Failed {
        reason: "boom".to_string(),
    }
}

#[test]
fn ignored_failure_keeps_success() {
    let mut report = RunReport::start(PipelineKind::Packager, "linux64");
    let stage = Stage::new("git fetch", StageKind::Fetch).on_failure(FailurePolicy::Ignore);
    report.record(&stage, failed(), 3);
    assert!(report.succeeded());
    assert!(!report.stages[0].fails_run());
}

#[test]
fn flunked_failure_fails_run() {
    let mut report = RunReport::start(PipelineKind::Packager, "linux64");
    let stage = Stage::new(
        "make cleanall",
        StageKind::Make {
            targets: "cleanall".to_string(),
            jobs: None,
            silence: std::time::Duration::from_secs(1),
        },
    )
    .on_failure(FailurePolicy::Flunk);
    report.record(&stage, failed(), 3);
    assert_eq!(report.status, RunStatus::Failure);
}

#[test]
fn finish_stamps_time_and_artifact() {
    let report = RunReport::start(PipelineKind::Tester, "linux64")
        .finish(Some("https://example.com/a.tar.gz".to_string()));
    assert!(report.finished_at.is_some());
    assert_eq!(
        report.artifact_url.as_deref(),
        Some("https://example.com/a.tar.gz")
    );
}

#[test]
fn serializes_outcome_inline() {
    let mut report = RunReport::start(PipelineKind::Tester, "linux64");
    report.record(&Stage::new("download", StageKind::Download), failed(), 1);
    report.record(&Stage::new("extract", StageKind::Extract), StageOutcome::NotRun, 0);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["pipeline"], "tester");
    assert_eq!(json["status"], "failure");
    assert_eq!(json["stages"][0]["outcome"], "failed");
    assert_eq!(json["stages"][0]["reason"], "boom");
    assert_eq!(json["stages"][0]["policy"], "halt");
    assert_eq!(json["stages"][1]["outcome"], "not_run");
}
