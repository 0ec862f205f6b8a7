// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! nb - nightly build orchestration CLI

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod adapters;
mod commands;
mod completions;
mod error;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{branch, builders, dispatch, names, package, plan, test};
use completions::CompletionsArgs;
use nb_config::Config;
use output::OutputFormat;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use crate::error::NbError;

#[derive(Parser)]
#[command(
    name = "nb",
    version,
    about = "Nightly builds - package, test and promote Julia artifacts"
)]
struct Cli {
    /// Configuration file [default: <config dir>/nb/nb.toml]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Also write logs to a file in this directory
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build, package and publish a revision
    Package(package::PackageArgs),
    /// Test an uploaded artifact and promote it on success
    Test(test::TestArgs),
    /// Run the tester described by a spooled trigger
    Dispatch(dispatch::DispatchArgs),
    /// Show which stages a run would execute
    Plan(plan::PlanArgs),
    /// Derive artifact names and store keys
    Names(names::NamesArgs),
    /// Check whether a branch is packaged
    Branch(branch::BranchArgs),
    /// List configured builders
    Builders,
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Completions need neither config nor logging
    if let Commands::Completions(args) = &cli.command {
        completions::generate_completions::<Cli>(args.shell);
        return ExitCode::SUCCESS;
    }

    let _log_guard = match logging::setup_logging(cli.log_dir.as_deref()) {
        Ok(guard) => guard,
        Err(e) => return fail(&e),
    };

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => fail(&e),
    }
}

/// Dispatch a command; `Ok(false)` means the command ran and reported failure
async fn run(cli: Cli) -> Result<bool> {
    let config = Config::load(cli.config.as_deref())
        .map_err(|e| NbError::config_invalid(cli.config.as_deref(), e))?;
    let config = Arc::new(config);
    let format = cli.format;

    match cli.command {
        Commands::Package(args) => package::handle(args, config, format).await,
        Commands::Test(args) => test::handle(args, config, format).await,
        Commands::Dispatch(args) => dispatch::handle(args, config, format).await,
        Commands::Plan(args) => plan::handle(args, &config, format).map(|()| true),
        Commands::Names(args) => names::handle(args, &config, format).map(|()| true),
        Commands::Branch(args) => Ok(branch::handle(args, &config, format)),
        Commands::Builders => {
            builders::handle(&config, format);
            Ok(true)
        }
        Commands::Completions(_) => Ok(true),
    }
}

fn fail(e: &anyhow::Error) -> ExitCode {
    match e.downcast_ref::<NbError>() {
        Some(nb) => eprint!("{}", nb),
        None => eprintln!("error: {:#}", e),
    }
    ExitCode::from(2)
}
