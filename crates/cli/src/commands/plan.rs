// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `nb plan <builder>` - Show which stages a run would execute

use super::find_builder;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use clap::{Args, ValueEnum};
use nb_config::Config;
use nb_engine::{packager_pipeline, plan, tester_pipeline, PlannedStage};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PipelineArg {
    Packager,
    Tester,
}

#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Builder to plan for
    pub builder: String,

    /// Pipeline to plan
    #[arg(long, value_enum, default_value = "packager")]
    pub pipeline: PipelineArg,

    /// Branch of a packager run
    #[arg(long, default_value = "master")]
    pub branch: String,

    /// Artifact URL of a tester run
    #[arg(long)]
    pub url: Option<String>,

    /// Plan a non-assert build
    #[arg(long)]
    pub no_assert: bool,
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct PlanRow(PlannedStage);

impl fmt::Display for PlanRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = &self.0;
        write!(
            f,
            "{:<5} {:<26} {:<22} {}",
            if stage.runs { "run" } else { "skip" },
            stage.name,
            stage.condition.to_string(),
            stage.policy
        )
    }
}

pub fn rows(config: &Config, args: &PlanArgs) -> Result<Vec<PlanRow>> {
    let builder = find_builder(config, &args.builder)?;
    let mut ctx = builder.context().with_branch(args.branch.as_str());
    ctx.url = args.url.clone();
    ctx.assert_build = !args.no_assert;

    let pipeline = match args.pipeline {
        PipelineArg::Packager => packager_pipeline(config),
        PipelineArg::Tester => tester_pipeline(config),
    };
    Ok(plan(&pipeline, builder, &ctx, config)
        .into_iter()
        .map(PlanRow)
        .collect())
}

pub fn handle(args: PlanArgs, config: &Config, format: OutputFormat) -> Result<()> {
    output::print_list(&rows(config, &args)?, format);
    Ok(())
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod tests;
