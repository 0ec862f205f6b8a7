//! Help and version specs

use crate::prelude::*;

#[test]
fn help_lists_subcommands() {
    let run = Project::empty().nb().args(&["--help"]).passes();
    for command in ["package", "test", "dispatch", "plan", "names", "branch", "builders", "completions"] {
        assert!(run.stdout().contains(command), "missing {}", command);
    }
}

#[test]
fn version_is_printed() {
    Project::empty()
        .nb()
        .args(&["--version"])
        .passes()
        .stdout_has("nb ");
}

#[test]
fn package_help_documents_force() {
    Project::empty()
        .nb()
        .args(&["package", "--help"])
        .passes()
        .stdout_has("--force")
        .stdout_has("--revision")
        .stdout_has("--local");
}

#[test]
fn completions_are_generated() {
    Project::empty()
        .nb()
        .args(&["completions", "bash"])
        .passes()
        .stdout_has("_nb()");
}
