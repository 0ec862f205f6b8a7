// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `nb branch <branch>` - Check a change against the change filter

use crate::output::{self, OutputFormat};
use clap::Args;
use nb_config::Config;
use nb_core::Change;
use serde::Serialize;
use std::fmt;

#[derive(Args, Debug)]
pub struct BranchArgs {
    /// Branch name
    pub branch: String,

    /// Project the change was pushed to
    #[arg(long, default_value = "JuliaLang/julia")]
    pub project: String,
}

#[derive(Debug, Serialize)]
pub struct Decision {
    pub project: String,
    pub branch: String,
    pub build: bool,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.build { "build" } else { "skip" };
        write!(f, "{} {}: {}", self.project, self.branch, verdict)
    }
}

pub fn decide(config: &Config, args: &BranchArgs) -> Decision {
    let change = Change {
        project: args.project.clone(),
        branch: args.branch.clone(),
        revision: None,
    };
    Decision {
        build: config.changes.matches(&change),
        project: change.project,
        branch: change.branch,
    }
}

/// Prints the decision; `false` when the change is filtered out
pub fn handle(args: BranchArgs, config: &Config, format: OutputFormat) -> bool {
    let decision = decide(config, &args);
    output::print(&decision, format);
    decision.build
}

#[cfg(test)]
#[path = "branch_tests.rs"]
mod tests;
