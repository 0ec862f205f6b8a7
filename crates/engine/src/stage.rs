// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stage model
//!
//! A pipeline is a flat list of stages. Each stage pairs an action with a
//! run condition and a failure policy; the runner walks the list once.

use nb_config::BuilderDef;
use nb_core::{ArtifactLocation, BuildContext, StorageLayout};
use serde::Serialize;
use std::time::Duration;

/// Which of the two pipelines a stage list implements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineKind {
    Packager,
    Tester,
}

impl std::fmt::Display for PipelineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineKind::Packager => f.write_str("packager"),
            PipelineKind::Tester => f.write_str("tester"),
        }
    }
}

/// What a stage does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageKind {
    /// `git fetch` in an existing checkout
    Fetch,
    /// Clone if needed, then clean checkout of the requested revision
    Checkout,
    /// Install mac build dependencies
    BrewDeps,
    /// `make {flags} {targets}` with the package environment
    Make {
        targets: String,
        jobs: Option<u32>,
        silence: Duration,
    },
    /// Record commit metadata from `git log`
    CommitMetadata,
    /// Record version facts from the freshly built binary
    Version,
    /// Record `make print-JULIA_BINARYDIST_FILENAME` output
    ArtifactReport,
    /// Derive local and upload filenames
    DeriveNames,
    /// Build the mac app bundle, falling back to the older makefile layout
    MakeApp,
    /// Move the artifact into the coordinator staging directory
    Transfer,
    /// Put the staged artifact into the store
    Upload { latest: bool },
    /// Remove the staged artifact
    CleanupCoordinator,
    /// Start the tester pipeline for the uploaded artifact
    TriggerTests,
    /// Start a coverage run
    TriggerCoverage,
    /// Empty the tester workspace
    CleanWorkspace,
    /// Fetch the artifact named by the run's URL
    Download,
    /// Unpack the downloaded artifact
    Extract,
    /// Run the full test suite against the unpacked binary
    RunTests { silence: Duration, max_time: Duration },
    /// Copy the pretesting key to its nightly (or latest) key
    Promote { latest: bool },
    /// Delete the promoted pretesting key
    CleanupPretesting,
    /// Start the paired non-assert build
    TriggerNonAssert,
}

/// When a stage runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Always,
    IsMac,
    IsWindows,
    ShouldUpload,
    ShouldUploadLatest,
    ShouldTriggerTests,
    ShouldRunCoverage,
    ShouldPromote,
    IsAssertNightly,
}

impl Condition {
    pub fn holds(&self, builder: &BuilderDef, ctx: &BuildContext, layout: &StorageLayout) -> bool {
        match self {
            Condition::Always => true,
            Condition::IsMac => ctx.platform.is_mac(),
            Condition::IsWindows => ctx.platform.is_windows(),
            Condition::ShouldUpload => should_upload(builder),
            Condition::ShouldUploadLatest => should_upload_latest(builder, ctx),
            Condition::ShouldTriggerTests => should_trigger_tests(builder),
            Condition::ShouldRunCoverage => should_run_coverage(builder),
            Condition::ShouldPromote => should_promote(ctx, layout),
            Condition::IsAssertNightly => is_assert_nightly(ctx, layout),
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Condition::Always => "always",
            Condition::IsMac => "is_mac",
            Condition::IsWindows => "is_windows",
            Condition::ShouldUpload => "should_upload",
            Condition::ShouldUploadLatest => "should_upload_latest",
            Condition::ShouldTriggerTests => "should_trigger_tests",
            Condition::ShouldRunCoverage => "should_run_coverage",
            Condition::ShouldPromote => "should_promote",
            Condition::IsAssertNightly => "is_assert_nightly",
        };
        f.write_str(name)
    }
}

/// What a failed stage does to the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Logged only
    Ignore,
    /// Run fails, later stages still run
    Flunk,
    /// Run fails, later stages do not run
    Halt,
}

impl std::fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailurePolicy::Ignore => f.write_str("ignore"),
            FailurePolicy::Flunk => f.write_str("flunk"),
            FailurePolicy::Halt => f.write_str("halt"),
        }
    }
}

/// One step of a pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    pub name: String,
    pub kind: StageKind,
    pub when: Condition,
    pub failure: FailurePolicy,
}

impl Stage {
    /// An unconditional stage that halts the run on failure
    pub fn new(name: impl Into<String>, kind: StageKind) -> Self {
        Self {
            name: name.into(),
            kind,
            when: Condition::Always,
            failure: FailurePolicy::Halt,
        }
    }

    pub fn when(mut self, when: Condition) -> Self {
        self.when = when;
        self
    }

    pub fn on_failure(mut self, failure: FailurePolicy) -> Self {
        self.failure = failure;
        self
    }
}

/// An ordered stage list
#[derive(Debug, Clone)]
pub struct Pipeline {
    pub kind: PipelineKind,
    pub stages: Vec<Stage>,
}

impl Pipeline {
    pub fn get_stage(&self, name: &str) -> Option<&Stage> {
        self.stages.iter().find(|s| s.name == name)
    }
}

pub fn should_upload(builder: &BuilderDef) -> bool {
    builder.upload
}

/// Untested builders publish the latest alias themselves, from master only
pub fn should_upload_latest(builder: &BuilderDef, ctx: &BuildContext) -> bool {
    builder.upload && !builder.tested && ctx.branch.as_deref() == Some("master")
}

pub fn should_trigger_tests(builder: &BuilderDef) -> bool {
    builder.upload && builder.tested
}

/// Packager-side coverage, for builders that publish straight to nightly.
///
/// A tested builder's upload is only a pretesting key that the tester
/// deletes after promotion; its coverage run is triggered by the tester.
pub fn should_run_coverage(builder: &BuilderDef) -> bool {
    builder.upload && builder.coverage && !builder.tested
}

/// Only artifacts still under the pretesting prefix are promoted
pub fn should_promote(ctx: &BuildContext, layout: &StorageLayout) -> bool {
    ctx.url
        .as_deref()
        .and_then(|url| layout.locate(url))
        .is_some_and(|(location, _)| location == ArtifactLocation::Pretesting)
}

pub fn is_assert_nightly(ctx: &BuildContext, layout: &StorageLayout) -> bool {
    ctx.assert_build && should_promote(ctx, layout)
}

/// Where the packager uploads: tested builders go through pretesting
pub fn upload_location(builder: &BuilderDef) -> ArtifactLocation {
    if builder.tested {
        ArtifactLocation::Pretesting
    } else {
        ArtifactLocation::Nightly
    }
}

#[cfg(test)]
#[path = "stage_tests.rs"]
mod tests;
