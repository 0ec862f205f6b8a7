// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod branch;
pub mod builders;
pub mod dispatch;
pub mod names;
pub mod package;
pub mod plan;

use crate::adapters;
use crate::error::NbError;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use nb_adapters::{DownloadAdapter, ShellAdapter, StoreAdapter, TransferAdapter, TriggerAdapter};
use nb_config::{BuilderDef, Config};
use nb_engine::{Pipeline, RunReport, RunRequest, Runner, RuntimeDeps};
use std::sync::Arc;

/// Look up a builder by name
pub fn find_builder<'a>(config: &'a Config, name: &str) -> Result<&'a BuilderDef, NbError> {
    config.get_builder(name).ok_or_else(|| {
        let known: Vec<&str> = config.builders.keys().map(String::as_str).collect();
        NbError::builder_not_found(name, &known)
    })
}

/// Run `pipeline` and print its report; `Ok(false)` when the run failed
pub async fn run_pipeline(
    config: Arc<Config>,
    local: bool,
    pipeline: Pipeline,
    request: RunRequest,
    format: OutputFormat,
) -> Result<bool> {
    let report = if local {
        tracing::info!("local run: nothing is uploaded or triggered");
        execute(adapters::local_deps(), config, &pipeline, request).await?
    } else {
        let deps = adapters::production_deps(&config);
        execute(deps, config, &pipeline, request).await?
    };
    output::print_report(&report, format);
    Ok(report.succeeded())
}

async fn execute<S, T, X, D, G>(
    deps: RuntimeDeps<S, T, X, D, G>,
    config: Arc<Config>,
    pipeline: &Pipeline,
    request: RunRequest,
) -> Result<RunReport>
where
    S: ShellAdapter,
    T: StoreAdapter,
    X: TransferAdapter,
    D: DownloadAdapter,
    G: TriggerAdapter,
{
    let runner = Runner::new(deps, config);
    // Dropping the run kills the process group of the running stage
    tokio::select! {
        result = runner.run(pipeline, request) => Ok(result?),
        _ = tokio::signal::ctrl_c() => {
            tracing::warn!("interrupted, abandoning run");
            anyhow::bail!("interrupted")
        }
    }
}
