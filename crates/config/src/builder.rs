// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Builder definitions

use nb_core::{BuildContext, PlatformFacts};
use serde::{Deserialize, Serialize};

/// A builder: one platform, one worker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuilderDef {
    /// Builder name (set from table key, not from TOML content)
    #[serde(default)]
    pub name: String,
    /// Worker that runs this builder's jobs
    pub worker: String,
    #[serde(flatten)]
    pub platform: PlatformFacts,
    /// Upload packaged artifacts
    #[serde(default = "default_true")]
    pub upload: bool,
    /// Route uploads through the tester pipeline before promotion
    #[serde(default = "default_true")]
    pub tested: bool,
    /// Trigger a coverage run after upload
    #[serde(default)]
    pub coverage: bool,
    /// Thread budget for the test suite
    #[serde(default = "default_nthreads")]
    pub nthreads: u32,
    /// `JULIA_TEST_MAXRSS_MB` for tester runs
    #[serde(default)]
    pub maxrss: Option<u64>,
    /// `LLVM_CMAKE` for package builds
    #[serde(default)]
    pub llvm_cmake: Option<String>,
}

fn default_true() -> bool {
    true
}

fn default_nthreads() -> u32 {
    2
}

impl BuilderDef {
    /// Name of the packaging job
    pub fn packager_name(&self) -> String {
        if self.name.starts_with("build_") {
            self.name.clone()
        } else {
            format!("package_{}", self.name)
        }
    }

    /// Name of the testing job
    pub fn tester_name(&self) -> String {
        format!("tester_{}", self.name)
    }

    /// Fresh build context for a run on this builder
    pub fn context(&self) -> BuildContext {
        let mut ctx = BuildContext::new(self.name.clone(), self.platform.clone());
        ctx.nthreads = self.nthreads;
        ctx.maxrss = self.maxrss;
        ctx.llvm_cmake = self.llvm_cmake.clone();
        ctx
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
