// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Static platform facts for a builder

use serde::{Deserialize, Serialize};

/// Operating system family of a builder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
    Linux,
    Mac,
    Windows,
    FreeBsd,
}

impl Os {
    /// Classify an `os_name` as used in upload filenames (`linux`, `mac`, `win`, ...)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "linux" | "musl" => Some(Os::Linux),
            "mac" | "macos" | "osx" => Some(Os::Mac),
            "win" | "winnt" | "windows" => Some(Os::Windows),
            "freebsd" => Some(Os::FreeBsd),
            _ => None,
        }
    }

    /// Directory name used in object store keys
    pub fn upload_dir(&self) -> &'static str {
        match self {
            Os::Linux => "linux",
            Os::Mac => "mac",
            Os::Windows => "winnt",
            Os::FreeBsd => "freebsd",
        }
    }

    /// Suffix appended to executables built for this OS
    pub fn exe_suffix(&self) -> &'static str {
        match self {
            Os::Windows => ".exe",
            _ => "",
        }
    }
}

impl std::fmt::Display for Os {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.upload_dir())
    }
}

/// Facts about a build platform, fixed for the lifetime of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformFacts {
    /// OS label used in upload filenames (`linux`, `mac`, `win`, `freebsd`)
    pub os_name: String,
    /// Package extension without leading dot (`tar.gz`, `dmg`, `exe`)
    pub os_pkg_ext: String,
    /// Architecture label used by the build system (`x86_64`, `i686`, `armv7l`)
    pub tar_arch: String,
    /// Pointer width label (`32`, `64`)
    pub bits: String,
    /// Architecture directory in the object store (`x64`, `x86`, `armv7l`)
    pub up_arch: String,
    /// Extra `make` flags
    #[serde(default)]
    pub flags: Option<String>,
}

impl PlatformFacts {
    pub fn os(&self) -> Option<Os> {
        Os::from_name(&self.os_name)
    }

    pub fn is_mac(&self) -> bool {
        self.os() == Some(Os::Mac)
    }

    pub fn is_windows(&self) -> bool {
        self.os() == Some(Os::Windows)
    }

    /// `make` flags, empty when none are configured
    pub fn flags(&self) -> &str {
        self.flags.as_deref().unwrap_or("")
    }
}
