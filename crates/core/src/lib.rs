// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! nb-core: data model for the nightly build pipelines
//!
//! This crate provides:
//! - The per-run build context and platform facts
//! - Artifact filename and object-store path derivation
//! - Parsers for build probe output
//! - The branch gate and downstream trigger snapshots

pub mod branch;
pub mod context;
pub mod location;
pub mod naming;
pub mod parse;
pub mod platform;
pub mod trigger;

#[cfg(any(test, feature = "test-support"))]
pub mod fixtures;

pub use branch::{should_build_branch, BranchPolicy, Change, ChangeFilter};
pub use context::{ArtifactNames, BuildContext, CommitInfo, ContextError, VersionInfo};
pub use location::{ArtifactLocation, StorageLayout};
pub use naming::NamingError;
pub use parse::{parse_artifact_report, parse_commit_log, parse_version_output, ParseError};
pub use platform::{Os, PlatformFacts};
pub use trigger::{PipelineTrigger, COVERAGE_SCHEDULER, NONASSERT_SCHEDULER};
