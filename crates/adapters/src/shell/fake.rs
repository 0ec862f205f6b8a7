// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake shell adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ShellAdapter, ShellCommand, ShellError, ShellOutput};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Recorded command
#[derive(Debug, Clone)]
pub struct ShellCall {
    pub command: ShellCommand,
}

impl ShellCall {
    pub fn line(&self) -> String {
        self.command.display()
    }
}

type Response = Result<ShellOutput, String>;

/// Fake shell adapter for testing.
///
/// Commands succeed with empty output unless a scripted response matches.
/// The most recently scripted match wins.
#[derive(Clone, Default)]
pub struct FakeShellAdapter {
    responses: Arc<Mutex<Vec<(String, Response)>>>,
    calls: Arc<Mutex<Vec<ShellCall>>>,
}

impl FakeShellAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond to commands whose line contains `pattern`
    pub fn respond(&self, pattern: &str, output: ShellOutput) {
        self.responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((pattern.to_string(), Ok(output)));
    }

    /// Print `stdout` and succeed for commands containing `pattern`
    pub fn stdout(&self, pattern: &str, stdout: &str) {
        self.respond(pattern, ShellOutput::success(stdout));
    }

    /// Exit non-zero for commands containing `pattern`
    pub fn fail(&self, pattern: &str) {
        self.respond(pattern, ShellOutput::failure(1, format!("{} failed", pattern)));
    }

    /// Return an adapter error for commands containing `pattern`
    pub fn error(&self, pattern: &str, message: &str) {
        self.responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((pattern.to_string(), Err(message.to_string())));
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<ShellCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Command lines of all recorded calls
    pub fn lines(&self) -> Vec<String> {
        self.calls().iter().map(ShellCall::line).collect()
    }

    /// Whether any recorded command line contains `pattern`
    pub fn ran(&self, pattern: &str) -> bool {
        self.lines().iter().any(|l| l.contains(pattern))
    }
}

#[async_trait]
impl ShellAdapter for FakeShellAdapter {
    async fn run(&self, cmd: &ShellCommand) -> Result<ShellOutput, ShellError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(ShellCall {
                command: cmd.clone(),
            });

        let line = cmd.display();
        let responses = self.responses.lock().unwrap_or_else(|e| e.into_inner());
        match responses.iter().rev().find(|(p, _)| line.contains(p.as_str())) {
            Some((_, Ok(output))) => Ok(output.clone()),
            Some((_, Err(message))) => Err(ShellError::Io(message.clone())),
            None => Ok(ShellOutput::success("")),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
