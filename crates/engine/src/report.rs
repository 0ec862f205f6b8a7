// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run reports

use crate::stage::{FailurePolicy, PipelineKind, Stage};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// What happened to one stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum StageOutcome {
    Succeeded,
    Failed { reason: String },
    /// Condition did not hold
    Skipped,
    /// An earlier stage halted the run
    NotRun,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Success,
    Failure,
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunStatus::Success => f.write_str("success"),
            RunStatus::Failure => f.write_str("failure"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StageReport {
    pub name: String,
    pub policy: FailurePolicy,
    #[serde(flatten)]
    pub outcome: StageOutcome,
    pub elapsed_ms: u64,
}

impl StageReport {
    /// Whether this stage makes the run fail
    pub fn fails_run(&self) -> bool {
        matches!(self.outcome, StageOutcome::Failed { .. }) && self.policy != FailurePolicy::Ignore
    }
}

/// Record of one pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub id: Uuid,
    pub pipeline: PipelineKind,
    pub builder: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub status: RunStatus,
    pub stages: Vec<StageReport>,
    /// Public URL of the artifact this run published or promoted
    pub artifact_url: Option<String>,
}

impl RunReport {
    pub fn start(pipeline: PipelineKind, builder: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            pipeline,
            builder: builder.into(),
            started_at: Utc::now(),
            finished_at: None,
            status: RunStatus::Success,
            stages: Vec::new(),
            artifact_url: None,
        }
    }

    pub fn record(&mut self, stage: &Stage, outcome: StageOutcome, elapsed_ms: u64) {
        let report = StageReport {
            name: stage.name.clone(),
            policy: stage.failure,
            outcome,
            elapsed_ms,
        };
        if report.fails_run() {
            self.status = RunStatus::Failure;
        }
        self.stages.push(report);
    }

    pub fn finish(mut self, artifact_url: Option<String>) -> Self {
        self.finished_at = Some(Utc::now());
        self.artifact_url = artifact_url;
        self
    }

    pub fn succeeded(&self) -> bool {
        self.status == RunStatus::Success
    }

    pub fn get_stage(&self, name: &str) -> Option<&StageReport> {
        self.stages.iter().find(|s| s.name == name)
    }

    /// Outcome of the named stage, if it was recorded
    pub fn outcome(&self, name: &str) -> Option<&StageOutcome> {
        self.get_stage(name).map(|s| &s.outcome)
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
