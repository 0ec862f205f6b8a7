// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

fn args(builder: &str, report: &str) -> NamesArgs {
    NamesArgs {
        builder: builder.to_string(),
        version: "1.7.2".to_string(),
        shortcommit: "abc1234567".to_string(),
        report: report.to_string(),
    }
}

#[test]
fn reported_name_is_used_locally() {
    let names = derive(
        &Config::default(),
        &args("linux64", "JULIA_BINARYDIST_FILENAME=julia-1.7.2-linux-x86_64"),
    )
    .unwrap();

    assert_eq!(names.local_filename, "julia-1.7.2-linux-x86_64.tar.gz");
    assert_eq!(names.upload_filename, "julia-abc1234567-linux64.tar.gz");
    assert_eq!(
        names.pretesting_key,
        "julialangnightlies/pretesting/bin/linux/x64/1.7/julia-abc1234567-linux64.tar.gz"
    );
    assert_eq!(
        names.latest_key,
        "julialangnightlies/bin/linux/x64/julia-latest-linux64.tar.gz"
    );
    assert_eq!(
        names.nightly_url,
        "https://s3.amazonaws.com/julialangnightlies/bin/linux/x64/1.7/julia-abc1234567-linux64.tar.gz"
    );
}

#[parameterized(
    arm = { "linuxarmv7l", "julia-abc1234567-Linux-arm.tar.gz" },
    mac = { "macos64", "contrib/mac/app/Julia-1.7.2-abc1234567.dmg" },
    windows = { "win64", "julia-1.7.2-x86_64.exe" },
)]
fn empty_report_uses_legacy_names(builder: &str, expected: &str) {
    let names = derive(&Config::default(), &args(builder, "")).unwrap();
    assert_eq!(names.local_filename, expected);
}

#[test]
fn windows_keys_live_under_winnt() {
    let names = derive(&Config::default(), &args("win64", "")).unwrap();
    assert_eq!(
        names.nightly_key,
        "julialangnightlies/bin/winnt/x64/1.7/julia-abc1234567-win64.exe"
    );
}

#[test]
fn version_without_dot_is_rejected() {
    let mut args = args("linux64", "");
    args.version = "17".to_string();
    assert!(derive(&Config::default(), &args).is_err());
}
