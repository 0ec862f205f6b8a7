// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use clap::ValueEnum;
use nb_engine::{RunReport, StageOutcome};
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Print output in the specified format
pub fn print<T: Serialize + std::fmt::Display>(value: &T, format: OutputFormat) {
    match format {
        OutputFormat::Text => println!("{}", value),
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(value) {
                println!("{}", json);
            }
        }
    }
}

/// Print a list of items
pub fn print_list<T: Serialize + std::fmt::Display>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            for item in items {
                println!("{}", item);
            }
        }
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(items) {
                println!("{}", json);
            }
        }
    }
}

/// Print a finished run
pub fn print_report(report: &RunReport, format: OutputFormat) {
    match format {
        OutputFormat::Text => print!("{}", render_report(report)),
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(report) {
                println!("{}", json);
            }
        }
    }
}

/// One line per stage, then the overall status
pub fn render_report(report: &RunReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {} ({})", report.pipeline, report.builder, report.id);
    for stage in &report.stages {
        let line = match &stage.outcome {
            StageOutcome::Succeeded => format!("ok       {:<26} {}ms", stage.name, stage.elapsed_ms),
            StageOutcome::Failed { reason } => {
                let label = if stage.fails_run() { "FAILED" } else { "failed" };
                format!("{:<8} {:<26} {}", label, stage.name, reason)
            }
            StageOutcome::Skipped => format!("skipped  {}", stage.name),
            StageOutcome::NotRun => format!("not run  {}", stage.name),
        };
        let _ = writeln!(out, "  {}", line.trim_end());
    }
    if let Some(url) = &report.artifact_url {
        let _ = writeln!(out, "artifact: {}", url);
    }
    let _ = writeln!(out, "status: {}", report.status);
    out
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
