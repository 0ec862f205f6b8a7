//! Builder inventory specs

use crate::prelude::*;

#[test]
fn default_inventory_is_listed() {
    Project::empty()
        .nb()
        .args(&["builders"])
        .passes()
        .stdout_has("linux64")
        .stdout_has("macos64")
        .stdout_has("win64")
        .stdout_has("build_ubuntu64");
}

#[test]
fn configured_builder_replaces_inventory() {
    let project = Project::empty();
    project.config(
        r#"
[builder.linux64]
worker = "worker-1"
os_name = "linux"
os_pkg_ext = "tar.gz"
tar_arch = "x86_64"
bits = "64"
up_arch = "x64"
coverage = true
"#,
    );

    project
        .nb()
        .args(&["builders"])
        .passes()
        .stdout_eq("linux64          worker-1             linux    x64      tar.gz  upload,tested,coverage\n");
}

#[test]
fn json_output() {
    let run = Project::empty()
        .nb()
        .args(&["--format", "json", "builders"])
        .passes();
    let builders = run.json();
    let build_only = builders
        .as_array()
        .unwrap()
        .iter()
        .find(|b| b["name"] == "build_ubuntu64")
        .unwrap();
    assert_eq!(build_only["upload"], false);
    assert_eq!(build_only["tested"], false);
}
