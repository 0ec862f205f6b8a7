// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::shell::FakeShellAdapter;
use crate::store::FakeStoreAdapter;
use crate::trigger::FakeTriggerAdapter;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// A writer that captures log output for testing
#[derive(Clone, Default)]
struct CapturedLogs {
    logs: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    fn new() -> Self {
        Self::default()
    }

    fn contents(&self) -> String {
        let logs = self.logs.lock().unwrap();
        String::from_utf8_lossy(&logs).to_string()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.logs.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run a test with captured tracing output
fn with_tracing<F, Fut>(f: F) -> (String, Fut::Output)
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future,
{
    let logs = CapturedLogs::new();
    let logs_clone = logs.clone();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(logs_clone)
        .with_ansi(false)
        .without_time()
        .finish();

    let result = tracing::subscriber::with_default(subscriber, || {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
            .block_on(f())
    });

    (logs.contents(), result)
}

// =============================================================================
// Precondition validation tests
// =============================================================================

#[tokio::test]
async fn traced_shell_rejects_nonexistent_cwd() {
    let fake = FakeShellAdapter::new();
    let traced = TracedShellAdapter::new(fake.clone());

    let result = traced
        .run(&ShellCommand::bash("make", "/nonexistent/path"))
        .await;

    let err = result.unwrap_err();
    assert!(
        err.to_string().contains("working directory does not exist"),
        "Expected error about working directory, got: {}",
        err
    );
    assert!(fake.calls().is_empty(), "inner adapter must not run");
}

// =============================================================================
// Tracing output verification tests
// =============================================================================

#[test]
fn traced_shell_logs_entry_and_completion() {
    let (logs, result) = with_tracing(|| async {
        let traced = TracedShellAdapter::new(FakeShellAdapter::new());
        traced
            .run(&ShellCommand::bash("make -j3 debug release", std::env::temp_dir()))
            .await
    });

    assert!(result.is_ok(), "run should succeed: {:?}", result);
    assert!(logs.contains("shell.run"), "Should log span name. Logs:\n{}", logs);
    assert!(
        logs.contains("make -j3 debug release"),
        "Should log command. Logs:\n{}",
        logs
    );
    assert!(logs.contains("starting"), "Should log entry. Logs:\n{}", logs);
    assert!(
        logs.contains("command succeeded"),
        "Should log completion. Logs:\n{}",
        logs
    );
    assert!(logs.contains("elapsed_ms"), "Should log timing. Logs:\n{}", logs);
}

#[test]
fn traced_shell_logs_nonzero_exit() {
    let (logs, result) = with_tracing(|| async {
        let fake = FakeShellAdapter::new();
        fake.fail("make testall");
        TracedShellAdapter::new(fake)
            .run(&ShellCommand::bash("make testall", std::env::temp_dir()))
            .await
    });

    assert!(!result.unwrap().succeeded());
    assert!(logs.contains("command failed"), "Logs:\n{}", logs);
    assert!(logs.contains("WARN"), "Logs:\n{}", logs);
}

#[test]
fn traced_store_logs_key() {
    let (logs, result) = with_tracing(|| async {
        TracedStoreAdapter::new(FakeStoreAdapter::new())
            .put(Path::new("/tmp/a.tar.gz"), "nightlies/bin/a.tar.gz")
            .await
    });

    assert!(result.is_ok());
    assert!(logs.contains("store.put"), "Logs:\n{}", logs);
    assert!(logs.contains("nightlies/bin/a.tar.gz"), "Logs:\n{}", logs);
    assert!(logs.contains("uploaded"), "Logs:\n{}", logs);
}

#[test]
fn traced_store_delete_failure_is_a_warning() {
    let (logs, result) = with_tracing(|| async {
        TracedStoreAdapter::new(FakeStoreAdapter::new())
            .delete("absent")
            .await
    });

    assert!(result.is_err());
    assert!(logs.contains("delete failed"), "Logs:\n{}", logs);
    assert!(logs.contains("WARN"), "Logs:\n{}", logs);
}

#[test]
fn traced_trigger_logs_scheduler() {
    let (logs, result) = with_tracing(|| async {
        TracedTriggerAdapter::new(FakeTriggerAdapter::new())
            .fire(&PipelineTrigger::nonassert())
            .await
    });

    assert!(result.is_ok());
    assert!(logs.contains("trigger.fire"), "Logs:\n{}", logs);
    assert!(logs.contains("non-assert build"), "Logs:\n{}", logs);
}
