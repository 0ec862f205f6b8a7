// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Spool-directory triggers
//!
//! Each trigger is written as one JSON file for the scheduler to pick up.
//! Files are written under a temporary name and renamed into place so a
//! reader never sees a partial trigger.

use super::{TriggerAdapter, TriggerError};
use async_trait::async_trait;
use nb_core::PipelineTrigger;
use std::path::{Path, PathBuf};

/// Writes triggers into a spool directory
#[derive(Clone)]
pub struct SpoolTrigger {
    dir: PathBuf,
}

impl SpoolTrigger {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl TriggerAdapter for SpoolTrigger {
    async fn fire(&self, trigger: &PipelineTrigger) -> Result<(), TriggerError> {
        let json =
            serde_json::to_vec_pretty(trigger).map_err(|e| TriggerError::Invalid(e.to_string()))?;
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| TriggerError::Io(format!("{}: {}", self.dir.display(), e)))?;

        let id = uuid::Uuid::new_v4();
        let tmp = self.dir.join(format!(".{}.tmp", id));
        let path = self.dir.join(format!("{}.json", id));
        tokio::fs::write(&tmp, json)
            .await
            .map_err(|e| TriggerError::Io(e.to_string()))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| TriggerError::Io(e.to_string()))?;

        tracing::debug!(path = %path.display(), scheduler = %trigger.scheduler, "trigger spooled");
        Ok(())
    }
}

/// Read a spooled trigger file
pub fn read_spooled(path: &Path) -> Result<PipelineTrigger, TriggerError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| TriggerError::Io(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&content).map_err(|e| TriggerError::Invalid(e.to_string()))
}

#[cfg(test)]
#[path = "spool_tests.rs"]
mod tests;
