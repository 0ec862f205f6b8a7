//! Error reporting specs
//!
//! Errors exit with status 2 and explain themselves on stderr.

use crate::prelude::*;

#[test]
fn unknown_builder() {
    Project::empty()
        .nb()
        .args(&["plan", "vax"])
        .errors()
        .stderr_has("error: Builder 'vax' not found")
        .stderr_has("nb builders");
}

#[test]
fn missing_explicit_config() {
    Project::empty()
        .nb()
        .args(&["--config", "nope.toml", "builders"])
        .errors()
        .stderr_has("Failed to load configuration from nope.toml");
}

#[test]
fn malformed_config() {
    let project = Project::empty();
    project.file("nb.toml", "[storage]\nattempts = 0\n");
    project
        .nb()
        .args(&["builders"])
        .errors()
        .stderr_has("Failed to load configuration")
        .stderr_has("storage");
}

#[test]
fn package_needs_branch_or_revision() {
    Project::configured()
        .nb()
        .args(&["package", "linux64"])
        .errors()
        .stderr_has("Nothing to check out");
}

#[test]
fn filtered_branch_is_refused() {
    Project::configured()
        .nb()
        .args(&["package", "linux64", "--branch", "feature/x"])
        .errors()
        .stderr_has("JuliaLang/julia feature/x is not packaged")
        .stderr_has("--force");
}
