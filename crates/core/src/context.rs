// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Build context
//!
//! The properties of a single pipeline run. Static facts are fixed when the
//! context is created; derived facts are filled in by pipeline stages and
//! can be set exactly once.

use crate::platform::PlatformFacts;
use serde::Serialize;
use thiserror::Error;

/// Errors from mutating a build context
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContextError {
    #[error("{0} already derived for this run")]
    AlreadyDerived(&'static str),
}

/// Version facts reported by the freshly built binary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    /// Full `major.minor.patch` version
    pub version: String,
    /// `major.minor`
    pub majmin: String,
    /// Abbreviated commit hash
    pub shortcommit: String,
}

/// Metadata of the commit being built
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitInfo {
    #[serde(rename = "commitmessage")]
    pub message: String,
    #[serde(rename = "commitname")]
    pub committer_name: String,
    #[serde(rename = "commitemail")]
    pub committer_email: String,
    #[serde(rename = "authorname")]
    pub author_name: String,
    #[serde(rename = "authoremail")]
    pub author_email: String,
}

/// Filenames derived for the packaged artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactNames {
    /// Path of the artifact on the build machine, relative to the checkout
    pub local_filename: String,
    /// Canonical filename used in the object store
    pub upload_filename: String,
}

/// Properties flowing through one pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct BuildContext {
    pub builder: String,
    pub platform: PlatformFacts,
    pub branch: Option<String>,
    pub revision: Option<String>,
    pub repository: Option<String>,
    /// Scheduler that started this run
    pub scheduler: Option<String>,
    /// Whether this is an assert-enabled build
    pub assert_build: bool,
    /// Artifact URL a tester run downloads
    pub url: Option<String>,
    /// Worker thread budget for the test suite
    pub nthreads: u32,
    /// Per-worker RSS ceiling for the test suite, in MB
    pub maxrss: Option<u64>,
    /// Value for `LLVM_CMAKE` during builds
    pub llvm_cmake: Option<String>,
    /// Short commit handed over by a triggering run
    pub known_shortcommit: Option<String>,

    version: Option<VersionInfo>,
    commit: Option<CommitInfo>,
    artifact_report: Option<String>,
    names: Option<ArtifactNames>,
    download_url: Option<String>,
}

impl BuildContext {
    pub fn new(builder: impl Into<String>, platform: PlatformFacts) -> Self {
        Self {
            builder: builder.into(),
            platform,
            branch: None,
            revision: None,
            repository: None,
            scheduler: None,
            assert_build: true,
            url: None,
            nthreads: 1,
            maxrss: None,
            llvm_cmake: None,
            known_shortcommit: None,
            version: None,
            commit: None,
            artifact_report: None,
            names: None,
            download_url: None,
        }
    }

    pub fn with_branch(self, branch: impl Into<String>) -> Self {
        Self {
            branch: Some(branch.into()),
            ..self
        }
    }

    pub fn with_url(self, url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..self
        }
    }

    pub fn version(&self) -> Option<&VersionInfo> {
        self.version.as_ref()
    }

    pub fn commit(&self) -> Option<&CommitInfo> {
        self.commit.as_ref()
    }

    /// Raw `make print-JULIA_BINARYDIST_FILENAME` output
    pub fn artifact_report(&self) -> Option<&str> {
        self.artifact_report.as_deref()
    }

    pub fn names(&self) -> Option<&ArtifactNames> {
        self.names.as_ref()
    }

    pub fn download_url(&self) -> Option<&str> {
        self.download_url.as_deref()
    }

    pub fn shortcommit(&self) -> Option<&str> {
        self.version
            .as_ref()
            .map(|v| v.shortcommit.as_str())
            .or(self.known_shortcommit.as_deref())
    }

    pub fn set_version(&mut self, version: VersionInfo) -> Result<(), ContextError> {
        set_once(&mut self.version, version, "version")
    }

    pub fn set_commit(&mut self, commit: CommitInfo) -> Result<(), ContextError> {
        set_once(&mut self.commit, commit, "commit metadata")
    }

    pub fn set_artifact_report(&mut self, report: impl Into<String>) -> Result<(), ContextError> {
        set_once(&mut self.artifact_report, report.into(), "artifact_filename")
    }

    pub fn set_names(&mut self, names: ArtifactNames) -> Result<(), ContextError> {
        set_once(&mut self.names, names, "artifact names")
    }

    pub fn set_download_url(&mut self, url: impl Into<String>) -> Result<(), ContextError> {
        set_once(&mut self.download_url, url.into(), "download_url")
    }
}

fn set_once<T>(slot: &mut Option<T>, value: T, what: &'static str) -> Result<(), ContextError> {
    if slot.is_some() {
        return Err(ContextError::AlreadyDerived(what));
    }
    *slot = Some(value);
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
