// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Downstream pipeline triggers
//!
//! A trigger names a scheduler and carries a snapshot of the triggering
//! run's properties. Triggers are fire-and-forget: the triggering run never
//! waits for, or inherits the result of, the triggered one.

use crate::context::{BuildContext, CommitInfo};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Scheduler of the coverage job
pub const COVERAGE_SCHEDULER: &str = "Julia Coverage Testing";

/// Scheduler of the non-assert rebuild
pub const NONASSERT_SCHEDULER: &str = "Julia CI (non-assert build)";

/// Scheduler of a builder's tester pipeline
pub fn tester_scheduler(builder: &str) -> String {
    format!("Julia CI ({} testing)", builder)
}

/// Builder name of a tester scheduler, if `scheduler` is one
pub fn tester_builder(scheduler: &str) -> Option<&str> {
    scheduler
        .strip_prefix("Julia CI (")?
        .strip_suffix(" testing)")
}

/// A downstream pipeline invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineTrigger {
    pub scheduler: String,
    pub properties: BTreeMap<String, Value>,
}

impl PipelineTrigger {
    pub fn new(scheduler: impl Into<String>) -> Self {
        Self {
            scheduler: scheduler.into(),
            properties: BTreeMap::new(),
        }
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }

    fn with_opt(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.with(key, v),
            None => self,
        }
    }

    fn with_commit(self, ctx: &BuildContext) -> Self {
        let trigger = match ctx.commit() {
            Some(commit) => self
                .with("commitmessage", commit.message.as_str())
                .with("commitname", commit.committer_name.as_str())
                .with("commitemail", commit.committer_email.as_str())
                .with("authorname", commit.author_name.as_str())
                .with("authoremail", commit.author_email.as_str()),
            None => self,
        };
        trigger.with_opt("shortcommit", ctx.shortcommit())
    }

    /// Coverage run over the artifact at `url`
    pub fn coverage(ctx: &BuildContext, url: &str) -> Self {
        Self::new(COVERAGE_SCHEDULER)
            .with("url", url)
            .with_commit(ctx)
            .with_opt("scheduler", ctx.scheduler.as_deref())
    }

    /// Tester run for the builder that produced `ctx`
    pub fn tester(ctx: &BuildContext, url: &str) -> Self {
        Self::new(tester_scheduler(&ctx.builder))
            .with("url", url)
            .with_commit(ctx)
            .with_opt("branch", ctx.branch.as_deref())
            .with("assert_build", ctx.assert_build)
    }

    /// Rebuild of the same commit without assertions
    pub fn nonassert() -> Self {
        Self::new(NONASSERT_SCHEDULER).with("assert_build", false)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(Value::as_str)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.properties.get(key).and_then(Value::as_bool)
    }

    /// Commit metadata carried by the snapshot, if complete
    pub fn commit(&self) -> Option<CommitInfo> {
        Some(CommitInfo {
            message: self.get_str("commitmessage")?.to_string(),
            committer_name: self.get_str("commitname")?.to_string(),
            committer_email: self.get_str("commitemail")?.to_string(),
            author_name: self.get_str("authorname")?.to_string(),
            author_email: self.get_str("authoremail")?.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "trigger_tests.rs"]
mod tests;
