// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

fn args(project: &str, branch: &str) -> BranchArgs {
    BranchArgs {
        branch: branch.to_string(),
        project: project.to_string(),
    }
}

#[parameterized(
    master = { "JuliaLang/julia", "master", true },
    release = { "JuliaLang/julia", "release-1.2", true },
    buildbot_testing = { "staticfloat/julia", "sf/buildbot_testing", true },
    feature = { "JuliaLang/julia", "feature/x", false },
    foreign_project = { "someone/julia", "master", false },
)]
fn default_filter(project: &str, branch: &str, build: bool) {
    assert_eq!(decide(&Config::default(), &args(project, branch)).build, build);
}

#[test]
fn empty_project_list_accepts_any_project() {
    let mut config = Config::default();
    config.changes.projects.clear();
    assert!(decide(&config, &args("someone/julia", "master")).build);
}

#[test]
fn decision_text() {
    let decision = decide(&Config::default(), &args("JuliaLang/julia", "feature/x"));
    assert_eq!(decision.to_string(), "JuliaLang/julia feature/x: skip");
}
