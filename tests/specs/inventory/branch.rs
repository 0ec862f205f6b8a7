//! Change filter specs

use crate::prelude::*;

#[test]
fn master_is_built() {
    Project::empty()
        .nb()
        .args(&["branch", "master"])
        .passes()
        .stdout_eq("JuliaLang/julia master: build\n");
}

#[test]
fn release_branches_are_built() {
    Project::empty()
        .nb()
        .args(&["branch", "release-1.2"])
        .passes();
}

#[test]
fn feature_branches_are_skipped() {
    Project::empty()
        .nb()
        .args(&["branch", "feature/x"])
        .run_fails()
        .stdout_eq("JuliaLang/julia feature/x: skip\n");
}

#[test]
fn configured_branches() {
    let project = Project::empty();
    project.config("[changes]\nbranches = [\"main\"]\nprefixes = []\n");
    project.nb().args(&["branch", "main"]).passes();
    project.nb().args(&["branch", "master"]).run_fails();
}
