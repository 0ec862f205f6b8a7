// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Object store driven through configured CLI commands

use super::{StoreAdapter, StoreError};
use crate::shell::{CommandTimeouts, ShellAdapter, ShellCommand};
use async_trait::async_trait;
use nb_config::StorageDef;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Store adapter that renders the `put`/`copy`/`delete` templates of a
/// [`StorageDef`] and runs them on the coordinator, retrying failures.
#[derive(Clone)]
pub struct CommandStore<S> {
    shell: S,
    storage: StorageDef,
    cwd: PathBuf,
    timeouts: CommandTimeouts,
    backoff: Duration,
}

impl<S: ShellAdapter> CommandStore<S> {
    pub fn new(shell: S, storage: StorageDef) -> Self {
        let cwd = storage.staging_dir.clone();
        Self {
            shell,
            storage,
            cwd,
            timeouts: CommandTimeouts::default(),
            backoff: Duration::from_secs(2),
        }
    }

    pub fn with_timeouts(mut self, timeouts: CommandTimeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Delay before retry `n` is `n * backoff`
    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    async fn run(
        &self,
        op: &'static str,
        template: &str,
        vars: HashMap<&str, String>,
    ) -> Result<(), StoreError> {
        let script = nb_config::render(template, &vars)
            .map_err(|e| StoreError::Template(e.to_string()))?;
        let cwd = if self.cwd.is_dir() {
            self.cwd.clone()
        } else {
            std::env::temp_dir()
        };
        let cmd = ShellCommand::bash(script, cwd).with_timeouts(self.timeouts);

        let attempts = self.storage.attempts.max(1);
        let mut reason = String::new();
        for attempt in 1..=attempts {
            if attempt > 1 {
                tokio::time::sleep(self.backoff * (attempt - 1)).await;
            }
            match self.shell.run(&cmd).await {
                Ok(output) if output.succeeded() => return Ok(()),
                Ok(output) => {
                    reason = format!(
                        "exit {}: {}",
                        output
                            .exit_code
                            .map_or_else(|| "signal".to_string(), |c| c.to_string()),
                        output.stderr.trim()
                    );
                }
                Err(e) => reason = e.to_string(),
            }
            tracing::warn!(op, attempt, attempts, %reason, "store command failed");
        }

        Err(StoreError::CommandFailed {
            op,
            attempts,
            reason,
        })
    }
}

#[async_trait]
impl<S: ShellAdapter> StoreAdapter for CommandStore<S> {
    async fn put(&self, file: &Path, key: &str) -> Result<(), StoreError> {
        let vars = HashMap::from([
            ("key", key.to_string()),
            ("file", file.display().to_string()),
        ]);
        self.run("put", &self.storage.put, vars).await
    }

    async fn copy(&self, from: &str, to: &str) -> Result<(), StoreError> {
        let vars = HashMap::from([("from", from.to_string()), ("to", to.to_string())]);
        self.run("copy", &self.storage.copy, vars).await
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        let vars = HashMap::from([("key", key.to_string())]);
        self.run("delete", &self.storage.delete, vars).await
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
