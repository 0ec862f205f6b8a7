// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Platform fixtures for tests
#![cfg_attr(coverage_nightly, coverage(off))]

use crate::platform::PlatformFacts;

fn facts(os_name: &str, os_pkg_ext: &str, tar_arch: &str, bits: &str, up_arch: &str) -> PlatformFacts {
    PlatformFacts {
        os_name: os_name.to_string(),
        os_pkg_ext: os_pkg_ext.to_string(),
        tar_arch: tar_arch.to_string(),
        bits: bits.to_string(),
        up_arch: up_arch.to_string(),
        flags: None,
    }
}

pub fn linux64() -> PlatformFacts {
    facts("linux", "tar.gz", "x86_64", "64", "x64")
}

pub fn linuxarmv7l() -> PlatformFacts {
    facts("linux", "tar.gz", "armv7l", "armv7l", "armv7l")
}

pub fn mac64() -> PlatformFacts {
    facts("mac", "dmg", "x86_64", "64", "x64")
}

pub fn win64() -> PlatformFacts {
    facts("win", "exe", "x86_64", "64", "x64")
}
