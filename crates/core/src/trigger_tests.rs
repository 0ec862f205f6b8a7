// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::context::VersionInfo;
use crate::fixtures;

fn built_context() -> BuildContext {
    let mut ctx = BuildContext::new("linux64", fixtures::linux64()).with_branch("master");
    ctx.set_version(VersionInfo {
        version: "1.7.2".to_string(),
        majmin: "1.7".to_string(),
        shortcommit: "abc1234567".to_string(),
    })
    .unwrap();
    ctx.set_commit(CommitInfo {
        message: "Fix inference".to_string(),
        committer_name: "Jane".to_string(),
        committer_email: "jane@example.com".to_string(),
        author_name: "Joe".to_string(),
        author_email: "joe@example.com".to_string(),
    })
    .unwrap();
    ctx
}

#[test]
fn tester_scheduler_round_trips() {
    let scheduler = tester_scheduler("linux64");
    assert_eq!(scheduler, "Julia CI (linux64 testing)");
    assert_eq!(tester_builder(&scheduler), Some("linux64"));
    assert_eq!(tester_builder(COVERAGE_SCHEDULER), None);
    assert_eq!(tester_builder(NONASSERT_SCHEDULER), None);
}

#[test]
fn coverage_trigger_snapshots_commit() {
    let trigger = PipelineTrigger::coverage(&built_context(), "https://host/x.tar.gz");
    assert_eq!(trigger.scheduler, COVERAGE_SCHEDULER);
    assert_eq!(trigger.get_str("url"), Some("https://host/x.tar.gz"));
    assert_eq!(trigger.get_str("shortcommit"), Some("abc1234567"));
    assert_eq!(trigger.get_str("authoremail"), Some("joe@example.com"));
    assert!(!trigger.properties.contains_key("scheduler"));
}

#[test]
fn tester_trigger_carries_commit_for_reconstruction() {
    let ctx = built_context();
    let trigger = PipelineTrigger::tester(&ctx, "https://host/x.tar.gz");
    assert_eq!(trigger.scheduler, "Julia CI (linux64 testing)");
    assert_eq!(trigger.get_bool("assert_build"), Some(true));
    assert_eq!(trigger.get_str("branch"), Some("master"));
    assert_eq!(trigger.commit().as_ref(), ctx.commit());
}

#[test]
fn trigger_without_commit_omits_fields() {
    let ctx = BuildContext::new("linux64", fixtures::linux64());
    let trigger = PipelineTrigger::coverage(&ctx, "u");
    assert!(trigger.commit().is_none());
    assert!(!trigger.properties.contains_key("shortcommit"));
}

#[test]
fn nonassert_trigger_disables_asserts() {
    let trigger = PipelineTrigger::nonassert();
    assert_eq!(trigger.scheduler, NONASSERT_SCHEDULER);
    assert_eq!(trigger.get_bool("assert_build"), Some(false));
}

#[test]
fn trigger_serializes_to_json() {
    let trigger = PipelineTrigger::nonassert();
    let json = serde_json::to_string(&trigger).unwrap();
    let back: PipelineTrigger = serde_json::from_str(&json).unwrap();
    assert_eq!(back, trigger);
}
