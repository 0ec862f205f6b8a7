// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `nb names <builder>` - Derive artifact names and store keys offline

use super::find_builder;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use clap::Args;
use nb_config::Config;
use nb_core::naming;
use nb_core::{parse_version_output, ArtifactLocation};
use serde::Serialize;
use std::fmt;

#[derive(Args, Debug)]
pub struct NamesArgs {
    /// Builder the artifact was built on
    pub builder: String,

    /// Full version, e.g. 1.7.2
    #[arg(long)]
    pub version: String,

    /// Abbreviated commit
    #[arg(long)]
    pub shortcommit: String,

    /// Output of `make print-JULIA_BINARYDIST_FILENAME`; empty selects the legacy name
    #[arg(long, default_value = "")]
    pub report: String,
}

#[derive(Debug, Serialize)]
pub struct Names {
    pub local_filename: String,
    pub upload_filename: String,
    pub pretesting_key: String,
    pub nightly_key: String,
    pub latest_key: String,
    pub nightly_url: String,
}

impl fmt::Display for Names {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "local:      {}", self.local_filename)?;
        writeln!(f, "upload:     {}", self.upload_filename)?;
        writeln!(f, "pretesting: {}", self.pretesting_key)?;
        writeln!(f, "nightly:    {}", self.nightly_key)?;
        writeln!(f, "latest:     {}", self.latest_key)?;
        write!(f, "url:        {}", self.nightly_url)
    }
}

pub fn derive(config: &Config, args: &NamesArgs) -> Result<Names> {
    let builder = find_builder(config, &args.builder)?;
    let mut ctx = builder.context();
    ctx.set_version(parse_version_output(&format!(
        "{}\n{}",
        args.version, args.shortcommit
    ))?)?;
    ctx.set_artifact_report(args.report.trim())?;
    let names = naming::artifact_names(&ctx)?;
    ctx.set_names(names.clone())?;

    let layout = &config.storage.layout;
    Ok(Names {
        pretesting_key: layout.key(ArtifactLocation::Pretesting, &ctx)?,
        nightly_key: layout.key(ArtifactLocation::Nightly, &ctx)?,
        latest_key: layout.key(ArtifactLocation::NightlyLatest, &ctx)?,
        nightly_url: layout.url(ArtifactLocation::Nightly, &ctx)?,
        local_filename: names.local_filename,
        upload_filename: names.upload_filename,
    })
}

pub fn handle(args: NamesArgs, config: &Config, format: OutputFormat) -> Result<()> {
    output::print(&derive(config, &args)?, format);
    Ok(())
}

#[cfg(test)]
#[path = "names_tests.rs"]
mod tests;
