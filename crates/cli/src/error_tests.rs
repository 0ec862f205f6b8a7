// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn error_display() {
    let err = NbError::new("Something went wrong")
        .with_context("First context")
        .with_context("Second context")
        .with_suggestion("Try this")
        .with_suggestion("Or this");

    let output = format!("{}", err);
    assert!(output.contains("error: Something went wrong"));
    assert!(output.contains("-> First context"));
    assert!(output.contains("-> Second context"));
    assert!(output.contains("1. Try this"));
    assert!(output.contains("2. Or this"));
}

#[test]
fn builder_not_found_lists_known_builders() {
    let err = NbError::builder_not_found("linux128", &["linux64", "win64"]);
    let output = format!("{}", err);
    assert!(output.contains("Builder 'linux128' not found"));
    assert!(output.contains("Known builders: linux64, win64"));
    assert!(output.contains("nb builders"));
}

#[test]
fn source_is_shown_as_context() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    let err = NbError::config_invalid(Some(Path::new("/etc/nb.toml")), io);
    let output = format!("{}", err);
    assert!(output.contains("/etc/nb.toml"));
    assert!(output.contains("-> no such file"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn branch_filtered_suggests_force() {
    let output = format!("{}", NbError::branch_filtered("JuliaLang/julia", "feature/x"));
    assert!(output.contains("JuliaLang/julia feature/x is not packaged"));
    assert!(output.contains("--force"));
}
