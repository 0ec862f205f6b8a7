// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Nightly build execution engine

mod error;
mod executor;
mod pipelines;
pub mod render;
mod report;
mod runner;
mod stage;
mod workspace;

#[cfg(test)]
mod test_helpers;

pub use error::RuntimeError;
pub use executor::{ExecuteError, Executor, RunState};
pub use pipelines::{packager_pipeline, tester_pipeline};
pub use report::{RunReport, RunStatus, StageOutcome, StageReport};
pub use runner::{plan, PlannedStage, RunRequest, Runner, RuntimeDeps};
pub use stage::{
    is_assert_nightly, should_promote, should_run_coverage, should_trigger_tests, should_upload,
    should_upload_latest, upload_location, Condition, FailurePolicy, Pipeline, PipelineKind, Stage,
    StageKind,
};
pub use workspace::{prepare_workspace, workspace_dir};
