// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Change filtering: which pushes enter the packager pipeline

use serde::{Deserialize, Serialize};

/// Branches that are packaged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BranchPolicy {
    /// Exact branch names
    pub branches: Vec<String>,
    /// Branch name prefixes
    pub prefixes: Vec<String>,
}

impl Default for BranchPolicy {
    fn default() -> Self {
        Self {
            branches: vec!["master".to_string(), "sf/buildbot_testing".to_string()],
            prefixes: vec!["release-".to_string()],
        }
    }
}

impl BranchPolicy {
    /// Whether a push to `branch` should be packaged
    pub fn should_build_branch(&self, branch: &str) -> bool {
        self.branches.iter().any(|b| b == branch)
            || self.prefixes.iter().any(|p| branch.starts_with(p.as_str()))
    }
}

/// A source-control change offered to the scheduler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    /// `owner/repo` of the pushed repository
    pub project: String,
    pub branch: String,
    pub revision: Option<String>,
}

/// Gate evaluated before a packager run is scheduled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangeFilter {
    /// Accepted projects; empty accepts any
    pub projects: Vec<String>,
    #[serde(flatten)]
    pub branches: BranchPolicy,
}

impl Default for ChangeFilter {
    fn default() -> Self {
        Self {
            projects: vec!["JuliaLang/julia".to_string(), "staticfloat/julia".to_string()],
            branches: BranchPolicy::default(),
        }
    }
}

impl ChangeFilter {
    pub fn matches(&self, change: &Change) -> bool {
        let project_ok = self.projects.is_empty() || self.projects.iter().any(|p| *p == change.project);
        project_ok && self.branches.should_build_branch(&change.branch)
    }
}

/// `should_build_branch` with the default allow-list
pub fn should_build_branch(branch: &str) -> bool {
    BranchPolicy::default().should_build_branch(branch)
}

#[cfg(test)]
#[path = "branch_tests.rs"]
mod tests;
