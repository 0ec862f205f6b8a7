// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell command adapters

mod process;

pub use process::ProcessAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeShellAdapter, ShellCall};

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors from running a command
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("failed to start {program}: {reason}")]
    SpawnFailed { program: String, reason: String },
    #[error("no output for {0:?}, terminated")]
    Silent(Duration),
    #[error("still running after {0:?}, terminated")]
    TimedOut(Duration),
    #[error("io error: {0}")]
    Io(String),
}

/// Limits enforced while a command runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandTimeouts {
    /// Terminate after this long without output
    pub silence: Option<Duration>,
    /// Terminate after this long regardless of output
    pub max_time: Option<Duration>,
    /// Time between SIGTERM and SIGKILL
    pub grace: Duration,
}

impl Default for CommandTimeouts {
    fn default() -> Self {
        Self {
            silence: None,
            max_time: None,
            grace: Duration::from_secs(10),
        }
    }
}

/// A command to run on the build machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    pub argv: Vec<String>,
    pub cwd: PathBuf,
    /// `Some` sets a variable, `None` removes it
    pub env: BTreeMap<String, Option<String>>,
    pub timeouts: CommandTimeouts,
}

impl ShellCommand {
    pub fn new(argv: Vec<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            argv,
            cwd: cwd.into(),
            env: BTreeMap::new(),
            timeouts: CommandTimeouts::default(),
        }
    }

    /// `/bin/bash -c {script}`
    pub fn bash(script: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self::new(
            vec!["/bin/bash".to_string(), "-c".to_string(), script.into()],
            cwd,
        )
    }

    pub fn with_env(mut self, env: BTreeMap<String, Option<String>>) -> Self {
        self.env.extend(env);
        self
    }

    pub fn with_timeouts(mut self, timeouts: CommandTimeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Command line for logs and reports
    pub fn display(&self) -> String {
        self.argv.join(" ")
    }
}

/// Result of a command that ran to completion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellOutput {
    /// Exit code; `None` when terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ShellOutput {
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            exit_code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn failure(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            exit_code: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    pub fn succeeded(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Adapter for running commands on the build machine
#[async_trait]
pub trait ShellAdapter: Clone + Send + Sync + 'static {
    /// Run a command to completion, enforcing its timeouts.
    ///
    /// A non-zero exit is reported through [`ShellOutput::exit_code`], not
    /// as an error.
    async fn run(&self, cmd: &ShellCommand) -> Result<ShellOutput, ShellError>;
}
