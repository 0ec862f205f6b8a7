// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `nb package <builder>` - Build, package and publish one revision

use super::{find_builder, run_pipeline};
use crate::error::NbError;
use crate::output::OutputFormat;
use anyhow::Result;
use clap::Args;
use nb_config::Config;
use nb_core::Change;
use nb_engine::{packager_pipeline, workspace_dir, PipelineKind, RunRequest};
use std::sync::Arc;

#[derive(Args, Debug)]
pub struct PackageArgs {
    /// Builder to package on (see `nb builders`)
    pub builder: String,

    /// Branch to build; checked against the change filter
    #[arg(long)]
    pub branch: Option<String>,

    /// Exact revision to check out, overriding the branch head
    #[arg(long)]
    pub revision: Option<String>,

    /// Project the change was pushed to
    #[arg(long, default_value = "JuliaLang/julia")]
    pub project: String,

    /// Repository to clone instead of the configured one
    #[arg(long)]
    pub repository: Option<String>,

    /// Package even when the change filter rejects the branch
    #[arg(long)]
    pub force: bool,

    /// Build without assertions
    #[arg(long)]
    pub no_assert: bool,

    /// Build and package only: no upload, no triggers
    #[arg(long)]
    pub local: bool,
}

/// Resolve the builder and context for a packager run
pub fn request(config: &Config, args: &PackageArgs) -> Result<RunRequest, NbError> {
    let builder = find_builder(config, &args.builder)?.clone();

    match (&args.branch, &args.revision) {
        (None, None) => return Err(NbError::missing_revision()),
        (Some(branch), _) if !args.force => {
            let change = Change {
                project: args.project.clone(),
                branch: branch.clone(),
                revision: args.revision.clone(),
            };
            if !config.changes.matches(&change) {
                return Err(NbError::branch_filtered(&args.project, branch));
            }
        }
        _ => {}
    }

    let mut ctx = builder.context();
    ctx.branch = args.branch.clone();
    ctx.revision = args.revision.clone();
    ctx.repository = args.repository.clone();
    ctx.assert_build = !args.no_assert;

    Ok(RunRequest {
        workspace: workspace_dir(config, &builder, PipelineKind::Packager),
        builder,
        ctx,
    })
}

pub async fn handle(args: PackageArgs, config: Arc<Config>, format: OutputFormat) -> Result<bool> {
    let request = request(&config, &args)?;
    let pipeline = packager_pipeline(&config);
    run_pipeline(config, args.local, pipeline, request, format).await
}

#[cfg(test)]
#[path = "package_tests.rs"]
mod tests;
