//! Plan specs
//!
//! `nb plan` shows every stage with its condition, the decision for the
//! given builder and what a failure would do.

use crate::prelude::*;

const PRETESTING_URL: &str = "https://s3.amazonaws.com/julialangnightlies/pretesting/bin/linux/x64/1.7/julia-abc1234567-linux64.tar.gz";

#[test]
fn linux_packager_skips_mac_stages() {
    Project::empty()
        .nb()
        .args(&["plan", "linux64"])
        .passes()
        .stdout_has("skip  brew deps                  is_mac                 ignore")
        .stdout_has("run   upload                     should_upload          halt")
        .stdout_has("make cleanall")
        .stdout_has("flunk");
}

#[test]
fn tester_promotes_only_pretesting_artifacts() {
    let project = Project::empty();
    project
        .nb()
        .args(&["plan", "linux64", "--pipeline", "tester"])
        .passes()
        .stdout_has("run   clean workspace            always                 ignore")
        .stdout_has("skip  promote                    should_promote         halt");

    project
        .nb()
        .args(&["plan", "linux64", "--pipeline", "tester", "--url", PRETESTING_URL])
        .passes()
        .stdout_has("run   promote ");
}

#[test]
fn json_lists_decisions() {
    let run = Project::empty()
        .nb()
        .args(&["--format", "json", "plan", "macos64"])
        .passes();
    let stages = run.json();
    let brew = stages
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["name"] == "brew deps")
        .unwrap();
    assert_eq!(brew["runs"], true);
    assert_eq!(brew["condition"], "is_mac");
    assert_eq!(brew["policy"], "ignore");
}
