// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stage executor

use crate::render;
use crate::stage::{upload_location, Stage, StageKind};
use crate::RuntimeDeps;
use nb_adapters::{
    CommandTimeouts, DownloadAdapter, DownloadError, ShellAdapter, ShellCommand, ShellError,
    ShellOutput, StoreAdapter, StoreError, TransferAdapter, TransferError, TriggerAdapter,
    TriggerError,
};
use nb_config::{BuilderDef, Config};
use nb_core::naming::{self, NamingError};
use nb_core::{
    parse_artifact_report, parse_commit_log, parse_version_output, ArtifactLocation,
    BuildContext, ContextError, ParseError, PipelineTrigger,
};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::Instrument;

/// Errors that can occur during stage execution
#[derive(Debug, Error)]
pub enum ExecuteError {
    #[error("shell error: {0}")]
    Shell(#[from] ShellError),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("transfer error: {0}")]
    Transfer(#[from] TransferError),
    #[error("download error: {0}")]
    Download(#[from] DownloadError),
    #[error("trigger error: {0}")]
    Trigger(#[from] TriggerError),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("naming error: {0}")]
    Naming(#[from] NamingError),
    #[error("context error: {0}")]
    Context(#[from] ContextError),
    #[error("`{command}` exited with {status}{detail}")]
    CommandFailed {
        command: String,
        status: String,
        detail: String,
    },
    #[error("missing build property: {0}")]
    Missing(&'static str),
    #[error("not a pretesting artifact: {0}")]
    NotPromotable(String),
    #[error("io error: {0}")]
    Io(String),
}

/// Mutable state of one run
#[derive(Debug, Clone)]
pub struct RunState {
    pub builder: BuilderDef,
    pub ctx: BuildContext,
    /// Working directory of the run on the build machine
    pub workspace: PathBuf,
}

/// Executes stages using the configured adapters
pub struct Executor<S, T, X, D, G> {
    shell: S,
    store: T,
    transfer: X,
    download: D,
    triggers: G,
    config: Arc<Config>,
}

impl<S, T, X, D, G> Executor<S, T, X, D, G>
where
    S: ShellAdapter,
    T: StoreAdapter,
    X: TransferAdapter,
    D: DownloadAdapter,
    G: TriggerAdapter,
{
    /// Create a new executor
    pub fn new(deps: RuntimeDeps<S, T, X, D, G>, config: Arc<Config>) -> Self {
        Self {
            shell: deps.shell,
            store: deps.store,
            transfer: deps.transfer,
            download: deps.download,
            triggers: deps.triggers,
            config,
        }
    }

    /// Execute a single stage with tracing
    pub async fn execute(&self, stage: &Stage, state: &mut RunState) -> Result<(), ExecuteError> {
        let span = tracing::info_span!("stage", stage = %stage.name, builder = %state.builder.name);
        async {
            tracing::info!(policy = %stage.failure, "executing");

            let start = std::time::Instant::now();
            let result = self.execute_inner(&stage.kind, state).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(()) => tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "completed"),
                Err(e) => tracing::error!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "failed"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }

    /// Inner execution logic for a single stage
    async fn execute_inner(&self, kind: &StageKind, state: &mut RunState) -> Result<(), ExecuteError> {
        let layout = &self.config.storage.layout;

        match kind {
            StageKind::Fetch => {
                self.run_checked(state, render::fetch(), BTreeMap::new(), None, None)
                    .await?;
            }

            StageKind::Checkout => {
                let ctx = &state.ctx;
                let target = match (&ctx.revision, &ctx.branch) {
                    (Some(revision), _) => revision.clone(),
                    (None, Some(branch)) => format!("origin/{}", branch),
                    (None, None) => return Err(ExecuteError::Missing("revision")),
                };
                let repository = ctx
                    .repository
                    .clone()
                    .unwrap_or_else(|| self.config.source.repository.clone());
                self.run_checked(
                    state,
                    render::checkout(&repository, &target),
                    BTreeMap::new(),
                    None,
                    None,
                )
                .await?;
            }

            StageKind::BrewDeps => {
                self.run_checked(state, render::brew_deps(), BTreeMap::new(), None, None)
                    .await?;
            }

            StageKind::Make {
                targets,
                jobs,
                silence,
            } => {
                let argv = render::make(&state.ctx.platform, targets, *jobs);
                let env = self.package_env(&state.ctx);
                self.run_checked(state, argv, env, Some(*silence), None)
                    .await?;
            }

            StageKind::CommitMetadata => {
                let output = self
                    .run_checked(state, render::commit_log(), BTreeMap::new(), None, None)
                    .await?;
                state.ctx.set_commit(parse_commit_log(&output.stdout)?)?;
            }

            StageKind::Version => {
                let argv = render::version_probe(&state.ctx.platform);
                let output = self
                    .run_checked(state, argv, BTreeMap::new(), None, None)
                    .await?;
                let version = parse_version_output(&output.stdout)?;
                tracing::info!(version = %version.version, shortcommit = %version.shortcommit, "version");
                state.ctx.set_version(version)?;
            }

            StageKind::ArtifactReport => {
                // Older trees have no such target; the empty report selects legacy naming
                let output = self
                    .run(state, render::artifact_report(), BTreeMap::new(), None, None)
                    .await?;
                state
                    .ctx
                    .set_artifact_report(parse_artifact_report(&output.stdout))?;
            }

            StageKind::DeriveNames => {
                let names = naming::artifact_names(&state.ctx)?;
                tracing::info!(
                    local = %names.local_filename,
                    upload = %names.upload_filename,
                    "artifact names"
                );
                state.ctx.set_names(names)?;
            }

            StageKind::MakeApp => {
                let local = &names(&state.ctx)?.local_filename;
                let argv = render::mac_app(&state.ctx.platform, local);
                let env = self.package_env(&state.ctx);
                self.run_checked(state, argv, env, None, None).await?;
            }

            StageKind::Transfer => {
                let names = names(&state.ctx)?;
                let src = state.workspace.join(&names.local_filename);
                let dest = self.staged(&names.upload_filename);
                self.transfer.transfer(&src, &dest).await?;
            }

            StageKind::Upload { latest } => {
                let location = if *latest {
                    ArtifactLocation::NightlyLatest
                } else {
                    upload_location(&state.builder)
                };
                let key = layout.key(location, &state.ctx)?;
                if *latest {
                    warn_if_unaliased(&key);
                }
                let file = self.staged(&names(&state.ctx)?.upload_filename);
                self.store.put(&file, &key).await?;

                if !*latest {
                    let url = layout.url(location, &state.ctx)?;
                    tracing::info!(%url, %location, "published");
                    state.ctx.set_download_url(url)?;
                }
            }

            StageKind::CleanupCoordinator => {
                let file = self.staged(&names(&state.ctx)?.upload_filename);
                match tokio::fs::remove_file(&file).await {
                    Ok(()) => {}
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                    Err(e) => return Err(ExecuteError::Io(format!("{}: {}", file.display(), e))),
                }
            }

            StageKind::TriggerTests => {
                let url = state
                    .ctx
                    .download_url()
                    .ok_or(ExecuteError::Missing("download_url"))?;
                self.triggers
                    .fire(&PipelineTrigger::tester(&state.ctx, url))
                    .await?;
            }

            StageKind::TriggerCoverage => {
                let url = state
                    .ctx
                    .download_url()
                    .ok_or(ExecuteError::Missing("download_url"))?;
                self.triggers
                    .fire(&PipelineTrigger::coverage(&state.ctx, url))
                    .await?;
            }

            StageKind::CleanWorkspace => {
                self.run_checked(state, render::clean_workspace(), BTreeMap::new(), None, None)
                    .await?;
            }

            StageKind::Download => {
                let url = state.ctx.url.clone().ok_or(ExecuteError::Missing("url"))?;
                let dest = state
                    .workspace
                    .join(render::download_name(&state.ctx.platform));
                self.download.download(&url, &dest).await?;
            }

            StageKind::Extract => {
                let file = render::download_name(&state.ctx.platform);
                let argv = render::extract(&state.ctx.platform, &file);
                self.run_checked(state, argv, BTreeMap::new(), None, None)
                    .await?;
            }

            StageKind::RunTests { silence, max_time } => {
                let argv = render::test_suite(&state.ctx.platform, state.ctx.nthreads);
                let env = self.test_env(&state.ctx);
                self.run_checked(state, argv, env, Some(*silence), Some(*max_time))
                    .await?;
            }

            StageKind::Promote { latest } => {
                let pretesting = self.pretesting_key(&state.ctx)?;
                let (nightly, latest_key) = layout
                    .promotion_keys(&pretesting)
                    .ok_or_else(|| ExecuteError::NotPromotable(pretesting.clone()))?;

                if *latest {
                    warn_if_unaliased(&latest_key);
                    self.store.copy(&pretesting, &latest_key).await?;
                } else {
                    self.store.copy(&pretesting, &nightly).await?;
                    state
                        .ctx
                        .set_download_url(naming::download_url(&layout.download_base, &nightly))?;
                }
            }

            StageKind::CleanupPretesting => {
                let pretesting = self.pretesting_key(&state.ctx)?;
                self.store.delete(&pretesting).await?;
            }

            StageKind::TriggerNonAssert => {
                self.triggers.fire(&PipelineTrigger::nonassert()).await?;
            }
        }

        Ok(())
    }

    /// Run a command in the workspace; a non-zero exit is still `Ok`
    async fn run(
        &self,
        state: &RunState,
        argv: Vec<String>,
        env: BTreeMap<String, Option<String>>,
        silence: Option<Duration>,
        max_time: Option<Duration>,
    ) -> Result<ShellOutput, ExecuteError> {
        let timeouts = CommandTimeouts {
            silence: Some(silence.unwrap_or(self.config.timeouts.default_silence)),
            max_time,
            grace: self.config.timeouts.sigterm_grace,
        };
        let cmd = ShellCommand::new(argv, &state.workspace)
            .with_env(env)
            .with_timeouts(timeouts);
        Ok(self.shell.run(&cmd).await?)
    }

    /// Run a command in the workspace, failing on a non-zero exit
    async fn run_checked(
        &self,
        state: &RunState,
        argv: Vec<String>,
        env: BTreeMap<String, Option<String>>,
        silence: Option<Duration>,
        max_time: Option<Duration>,
    ) -> Result<ShellOutput, ExecuteError> {
        let command = argv.join(" ");
        let output = self.run(state, argv, env, silence, max_time).await?;
        if output.succeeded() {
            return Ok(output);
        }

        let status = match output.exit_code {
            Some(code) => format!("status {}", code),
            None => "a signal".to_string(),
        };
        let tail = output.stderr.trim().lines().last().unwrap_or("").to_string();
        Err(ExecuteError::CommandFailed {
            command,
            status,
            detail: if tail.is_empty() {
                String::new()
            } else {
                format!(": {}", tail)
            },
        })
    }

    /// Environment for build-toolchain commands
    fn package_env(&self, ctx: &BuildContext) -> BTreeMap<String, Option<String>> {
        let mut env = self.config.env.package.entries();
        env.insert("LLVM_CMAKE".to_string(), ctx.llvm_cmake.clone());
        env
    }

    /// Environment for the test suite
    fn test_env(&self, ctx: &BuildContext) -> BTreeMap<String, Option<String>> {
        let mut env = self.config.env.test.entries();
        env.insert(
            "JULIA_TEST_MAXRSS_MB".to_string(),
            ctx.maxrss.map(|m| m.to_string()),
        );
        env
    }

    fn staged(&self, upload_filename: &str) -> PathBuf {
        self.config.storage.staging_dir.join(upload_filename)
    }

    fn pretesting_key(&self, ctx: &BuildContext) -> Result<String, ExecuteError> {
        let url = ctx.url.as_deref().ok_or(ExecuteError::Missing("url"))?;
        match self.config.storage.layout.locate(url) {
            Some((ArtifactLocation::Pretesting, key)) => Ok(key),
            _ => Err(ExecuteError::NotPromotable(url.to_string())),
        }
    }
}

fn names(ctx: &BuildContext) -> Result<&nb_core::ArtifactNames, ExecuteError> {
    ctx.names().ok_or(ExecuteError::Missing("upload_filename"))
}

/// Filenames without the versioned prefix are published under their own name
fn warn_if_unaliased(latest_key: &str) {
    let filename = latest_key.rsplit('/').next().unwrap_or(latest_key);
    if !filename.starts_with("julia-latest-") {
        tracing::warn!(
            filename,
            "upload filename has no `julia-` prefix, latest alias keeps it unchanged"
        );
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
