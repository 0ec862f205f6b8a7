// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parsers for the fixed-format output of build probes

use crate::context::{CommitInfo, VersionInfo};
use thiserror::Error;

/// Errors from parsing command output.
///
/// Every variant carries the raw output so the failing run shows what the
/// probe actually printed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("{what}: expected {expected} lines, found {found} in {raw:?}")]
    TooFewLines {
        what: &'static str,
        expected: usize,
        found: usize,
        raw: String,
    },
    #[error("{what}: {reason} in {raw:?}")]
    Malformed {
        what: &'static str,
        reason: String,
        raw: String,
    },
}

/// Parse `{major}.{minor}.{patch}\n{shortcommit}` as printed by the version probe
pub fn parse_version_output(stdout: &str) -> Result<VersionInfo, ParseError> {
    const WHAT: &str = "version output";
    let lines = lines_at_least(stdout, 2, WHAT)?;

    let version = lines[0].trim();
    let shortcommit = lines[1].trim();
    let malformed = |reason: &str| ParseError::Malformed {
        what: WHAT,
        reason: reason.to_string(),
        raw: stdout.to_string(),
    };

    let dot = version.rfind('.').ok_or_else(|| malformed("version has no '.'"))?;
    if shortcommit.is_empty() {
        return Err(malformed("empty commit"));
    }

    Ok(VersionInfo {
        version: version.to_string(),
        majmin: version[..dot].to_string(),
        shortcommit: shortcommit.to_string(),
    })
}

/// Parse `git log -1 --pretty=format:%s%n%cN%n%cE%n%aN%n%aE`
pub fn parse_commit_log(stdout: &str) -> Result<CommitInfo, ParseError> {
    let lines = lines_at_least(stdout, 5, "commit log")?;
    Ok(CommitInfo {
        message: lines[0].to_string(),
        committer_name: lines[1].to_string(),
        committer_email: lines[2].to_string(),
        author_name: lines[3].to_string(),
        author_email: lines[4].to_string(),
    })
}

/// Raw artifact report from `make print-JULIA_BINARYDIST_FILENAME`
pub fn parse_artifact_report(stdout: &str) -> String {
    stdout.trim().to_string()
}

fn lines_at_least<'a>(
    stdout: &'a str,
    expected: usize,
    what: &'static str,
) -> Result<Vec<&'a str>, ParseError> {
    let lines: Vec<&str> = stdout
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .collect();
    if lines.len() < expected {
        return Err(ParseError::TooFewLines {
            what,
            expected,
            found: lines.len(),
            raw: stdout.to_string(),
        });
    }
    Ok(lines)
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
