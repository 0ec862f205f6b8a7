// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline driver loop

use crate::error::RuntimeError;
use crate::executor::{Executor, RunState};
use crate::report::{RunReport, StageOutcome};
use crate::stage::{Condition, FailurePolicy, Pipeline};
use crate::workspace::prepare_workspace;
use nb_adapters::{DownloadAdapter, ShellAdapter, StoreAdapter, TransferAdapter, TriggerAdapter};
use nb_config::{BuilderDef, Config};
use nb_core::BuildContext;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Runtime adapter dependencies
pub struct RuntimeDeps<S, T, X, D, G> {
    pub shell: S,
    pub store: T,
    pub transfer: X,
    pub download: D,
    pub triggers: G,
}

/// Inputs of one run
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub builder: BuilderDef,
    pub ctx: BuildContext,
    pub workspace: PathBuf,
}

/// A stage as it would run for a given builder and context
#[derive(Debug, Clone, Serialize)]
pub struct PlannedStage {
    pub name: String,
    pub condition: Condition,
    pub policy: FailurePolicy,
    pub runs: bool,
}

/// Runs pipelines one stage at a time
pub struct Runner<S, T, X, D, G> {
    executor: Executor<S, T, X, D, G>,
    config: Arc<Config>,
}

impl<S, T, X, D, G> Runner<S, T, X, D, G>
where
    S: ShellAdapter,
    T: StoreAdapter,
    X: TransferAdapter,
    D: DownloadAdapter,
    G: TriggerAdapter,
{
    pub fn new(deps: RuntimeDeps<S, T, X, D, G>, config: Arc<Config>) -> Self {
        Self {
            executor: Executor::new(deps, Arc::clone(&config)),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run every stage of `pipeline` in order.
    ///
    /// Stage failures are recorded in the report, never returned; the only
    /// error is a workspace that cannot be created.
    pub async fn run(
        &self,
        pipeline: &Pipeline,
        request: RunRequest,
    ) -> Result<RunReport, RuntimeError> {
        prepare_workspace(&request.workspace, &self.config.storage.staging_dir).map_err(
            |source| RuntimeError::Workspace {
                path: request.workspace.clone(),
                source,
            },
        )?;

        let layout = &self.config.storage.layout;
        let mut report = RunReport::start(pipeline.kind, request.builder.name.clone());
        let mut state = RunState {
            builder: request.builder,
            ctx: request.ctx,
            workspace: request.workspace,
        };
        tracing::info!(
            run_id = %report.id,
            pipeline = %pipeline.kind,
            builder = %state.builder.name,
            workspace = %state.workspace.display(),
            "run started"
        );

        let mut halted = false;
        for stage in &pipeline.stages {
            if halted {
                report.record(stage, StageOutcome::NotRun, 0);
                continue;
            }
            if !stage.when.holds(&state.builder, &state.ctx, layout) {
                tracing::debug!(stage = %stage.name, condition = %stage.when, "skipped");
                report.record(stage, StageOutcome::Skipped, 0);
                continue;
            }

            let start = std::time::Instant::now();
            let outcome = match self.executor.execute(stage, &mut state).await {
                Ok(()) => StageOutcome::Succeeded,
                Err(e) => {
                    match stage.failure {
                        FailurePolicy::Ignore => {
                            tracing::warn!(stage = %stage.name, error = %e, "ignoring failure")
                        }
                        FailurePolicy::Flunk => {}
                        FailurePolicy::Halt => halted = true,
                    }
                    StageOutcome::Failed {
                        reason: e.to_string(),
                    }
                }
            };
            report.record(stage, outcome, start.elapsed().as_millis() as u64);
        }

        let report = report.finish(state.ctx.download_url().map(str::to_string));
        tracing::info!(run_id = %report.id, status = %report.status, "run finished");
        Ok(report)
    }
}

/// Evaluate every stage condition up front.
///
/// Conditions depend only on static facts, so the plan matches what a run
/// would do as long as no earlier stage halts it.
pub fn plan(pipeline: &Pipeline, builder: &BuilderDef, ctx: &BuildContext, config: &Config) -> Vec<PlannedStage> {
    pipeline
        .stages
        .iter()
        .map(|stage| PlannedStage {
            name: stage.name.clone(),
            condition: stage.when,
            policy: stage.failure,
            runs: stage.when.holds(builder, ctx, &config.storage.layout),
        })
        .collect()
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
