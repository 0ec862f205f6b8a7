// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[test]
fn version_output_parses() {
    let info = parse_version_output("1.7.2\nabcdef1234\n").unwrap();
    assert_eq!(info.majmin, "1.7");
    assert_eq!(info.version, "1.7.2");
    assert_eq!(info.shortcommit, "abcdef1234");
}

#[test]
fn version_output_tolerates_crlf() {
    let info = parse_version_output("1.10.0\r\n0123456789\r\n").unwrap();
    assert_eq!(info.majmin, "1.10");
    assert_eq!(info.shortcommit, "0123456789");
}

#[test]
fn single_line_version_output_is_an_error() {
    let err = parse_version_output("1.7.2").unwrap_err();
    assert_eq!(
        err,
        ParseError::TooFewLines {
            what: "version output",
            expected: 2,
            found: 1,
            raw: "1.7.2".to_string(),
        }
    );
    assert!(err.to_string().contains("\"1.7.2\""));
}

#[parameterized(
    no_dot = { "17\nabcdef1234" },
    empty_commit = { "1.7.2\n" },
    blank_commit = { "1.7.2\n   \n" },
)]
fn malformed_version_output(raw: &str) {
    assert!(matches!(
        parse_version_output(raw),
        Err(ParseError::Malformed { .. })
    ));
}

#[test]
fn commit_log_parses_five_lines() {
    let raw = "Fix inference\nJane Committer\njane@example.com\nJoe Author\njoe@example.com";
    let commit = parse_commit_log(raw).unwrap();
    assert_eq!(commit.message, "Fix inference");
    assert_eq!(commit.committer_name, "Jane Committer");
    assert_eq!(commit.committer_email, "jane@example.com");
    assert_eq!(commit.author_name, "Joe Author");
    assert_eq!(commit.author_email, "joe@example.com");
}

#[test]
fn short_commit_log_reports_raw_text() {
    let err = parse_commit_log("subject\nname").unwrap_err();
    match err {
        ParseError::TooFewLines {
            expected,
            found,
            raw,
            ..
        } => {
            assert_eq!(expected, 5);
            assert_eq!(found, 2);
            assert_eq!(raw, "subject\nname");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn artifact_report_is_trimmed() {
    assert_eq!(
        parse_artifact_report("JULIA_BINARYDIST_FILENAME=julia-1.2.3\n"),
        "JULIA_BINARYDIST_FILENAME=julia-1.2.3"
    );
}
