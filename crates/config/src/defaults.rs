// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in builder inventory

use crate::BuilderDef;
use nb_core::PlatformFacts;

struct Entry {
    name: &'static str,
    worker: &'static str,
    os_name: &'static str,
    os_pkg_ext: &'static str,
    tar_arch: &'static str,
    bits: &'static str,
    up_arch: &'static str,
    coverage: bool,
}

const INVENTORY: &[Entry] = &[
    Entry { name: "linux64", worker: "centos6_9-x64", os_name: "linux", os_pkg_ext: "tar.gz", tar_arch: "x86_64", bits: "64", up_arch: "x64", coverage: true },
    Entry { name: "linux32", worker: "centos6_9-x86", os_name: "linux", os_pkg_ext: "tar.gz", tar_arch: "i686", bits: "32", up_arch: "x86", coverage: false },
    Entry { name: "linuxarmv7l", worker: "debian7_11-armv7l", os_name: "linux", os_pkg_ext: "tar.gz", tar_arch: "armv7l", bits: "armv7l", up_arch: "armv7l", coverage: false },
    Entry { name: "linuxaarch64", worker: "centos7_3-aarch64", os_name: "linux", os_pkg_ext: "tar.gz", tar_arch: "aarch64", bits: "aarch64", up_arch: "aarch64", coverage: false },
    Entry { name: "linuxppc64le", worker: "centos7_3-ppc64le", os_name: "linux", os_pkg_ext: "tar.gz", tar_arch: "powerpc64le", bits: "ppc64le", up_arch: "ppc64le", coverage: false },
    Entry { name: "win32", worker: "win6_2-x86", os_name: "win", os_pkg_ext: "exe", tar_arch: "i686", bits: "32", up_arch: "x86", coverage: false },
    Entry { name: "win64", worker: "win6_2-x64", os_name: "win", os_pkg_ext: "exe", tar_arch: "x86_64", bits: "64", up_arch: "x64", coverage: false },
    Entry { name: "macos64", worker: "osx10_10-x64", os_name: "mac", os_pkg_ext: "dmg", tar_arch: "x86_64", bits: "64", up_arch: "x64", coverage: false },
    Entry { name: "freebsd64", worker: "freebsd11_1-x64", os_name: "freebsd", os_pkg_ext: "tar.gz", tar_arch: "x86_64", bits: "64", up_arch: "x64", coverage: false },
];

// Extra build-only builders: they compile and test but never upload
const BUILD_ONLY: &[(&str, &str, &str, &str, &str)] = &[
    ("build_ubuntu32", "ubuntu16_04-x86", "i686", "32", "x86"),
    ("build_ubuntu64", "ubuntu16_04-x64", "x86_64", "64", "x64"),
    ("build_centos64", "centos7_3-x64", "x86_64", "64", "x64"),
];

pub(crate) fn builders() -> Vec<BuilderDef> {
    let mut builders: Vec<BuilderDef> = INVENTORY
        .iter()
        .map(|e| BuilderDef {
            name: e.name.to_string(),
            worker: e.worker.to_string(),
            platform: PlatformFacts {
                os_name: e.os_name.to_string(),
                os_pkg_ext: e.os_pkg_ext.to_string(),
                tar_arch: e.tar_arch.to_string(),
                bits: e.bits.to_string(),
                up_arch: e.up_arch.to_string(),
                flags: None,
            },
            upload: true,
            tested: true,
            coverage: e.coverage,
            nthreads: 2,
            maxrss: None,
            llvm_cmake: None,
        })
        .collect();

    builders.extend(BUILD_ONLY.iter().map(|(name, worker, tar_arch, bits, up_arch)| BuilderDef {
        name: name.to_string(),
        worker: worker.to_string(),
        platform: PlatformFacts {
            os_name: "linux".to_string(),
            os_pkg_ext: "tar.gz".to_string(),
            tar_arch: tar_arch.to_string(),
            bits: bits.to_string(),
            up_arch: up_arch.to_string(),
            flags: None,
        },
        upload: false,
        tested: false,
        coverage: false,
        nthreads: 2,
        maxrss: None,
        llvm_cmake: None,
    }));

    builders
}
