// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `nb dispatch <trigger.json>` - Run the tester a spooled trigger asks for

use super::{find_builder, run_pipeline};
use crate::error::NbError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use clap::Args;
use nb_adapters::read_spooled;
use nb_config::Config;
use nb_core::trigger::tester_builder;
use nb_core::PipelineTrigger;
use nb_engine::{tester_pipeline, workspace_dir, PipelineKind, RunRequest};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub struct DispatchArgs {
    /// Spooled trigger file
    pub trigger: PathBuf,

    /// Delete the trigger file once the run has finished
    #[arg(long)]
    pub consume: bool,

    /// Test only: no promotion, no triggers
    #[arg(long)]
    pub local: bool,
}

/// Rebuild the tester run a trigger describes
pub fn request(config: &Config, trigger: &PipelineTrigger) -> Result<RunRequest, NbError> {
    let name = tester_builder(&trigger.scheduler)
        .ok_or_else(|| NbError::not_a_tester_trigger(&trigger.scheduler))?;
    let builder = find_builder(config, name)?.clone();
    let url = trigger
        .get_str("url")
        .ok_or_else(|| NbError::missing_url("trigger"))?;

    let mut ctx = builder.context().with_url(url);
    ctx.scheduler = Some(trigger.scheduler.clone());
    ctx.branch = trigger.get_str("branch").map(str::to_string);
    ctx.known_shortcommit = trigger.get_str("shortcommit").map(str::to_string);
    ctx.assert_build = trigger.get_bool("assert_build").unwrap_or(true);
    if let Some(commit) = trigger.commit() {
        ctx.set_commit(commit)
            .map_err(|e| NbError::new("Invalid trigger").with_source(e))?;
    }

    Ok(RunRequest {
        workspace: workspace_dir(config, &builder, PipelineKind::Tester),
        builder,
        ctx,
    })
}

pub async fn handle(args: DispatchArgs, config: Arc<Config>, format: OutputFormat) -> Result<bool> {
    let trigger = read_spooled(&args.trigger).map_err(|e| {
        NbError::new(format!("Cannot read trigger {}", args.trigger.display())).with_source(e)
    })?;
    let request = request(&config, &trigger)?;
    tracing::info!(scheduler = %trigger.scheduler, path = %args.trigger.display(), "dispatching");

    let pipeline = tester_pipeline(&config);
    let passed = run_pipeline(config, args.local, pipeline, request, format).await?;

    if args.consume {
        std::fs::remove_file(&args.trigger)
            .with_context(|| format!("removing {}", args.trigger.display()))?;
    }
    Ok(passed)
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
