//! Artifact naming specs

use crate::prelude::*;

#[test]
fn reported_binarydist_name() {
    Project::empty()
        .nb()
        .args(&[
            "names",
            "linux64",
            "--version",
            "1.7.2",
            "--shortcommit",
            "abc1234567",
            "--report",
            "JULIA_BINARYDIST_FILENAME=julia-1.7.2-linux-x86_64",
        ])
        .passes()
        .stdout_eq(
            "local:      julia-1.7.2-linux-x86_64.tar.gz
upload:     julia-abc1234567-linux64.tar.gz
pretesting: julialangnightlies/pretesting/bin/linux/x64/1.7/julia-abc1234567-linux64.tar.gz
nightly:    julialangnightlies/bin/linux/x64/1.7/julia-abc1234567-linux64.tar.gz
latest:     julialangnightlies/bin/linux/x64/julia-latest-linux64.tar.gz
url:        https://s3.amazonaws.com/julialangnightlies/bin/linux/x64/1.7/julia-abc1234567-linux64.tar.gz
",
        );
}

#[test]
fn legacy_mac_name() {
    Project::empty()
        .nb()
        .args(&["names", "macos64", "--version", "1.7.2", "--shortcommit", "abc1234567"])
        .passes()
        .stdout_has("local:      contrib/mac/app/Julia-1.7.2-abc1234567.dmg")
        .stdout_has("upload:     julia-abc1234567-mac64.dmg");
}

#[test]
fn malformed_version() {
    Project::empty()
        .nb()
        .args(&["names", "linux64", "--version", "17", "--shortcommit", "abc1234567"])
        .errors()
        .stderr_has("version has no '.'");
}
