// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::download::{DownloadAdapter, DownloadError};
use crate::shell::{ShellAdapter, ShellCommand, ShellError, ShellOutput};
use crate::store::{StoreAdapter, StoreError};
use crate::transfer::{TransferAdapter, TransferError};
use crate::trigger::{TriggerAdapter, TriggerError};
use async_trait::async_trait;
use nb_core::PipelineTrigger;
use std::path::Path;
use tracing::Instrument;

/// Wrapper that adds tracing to any ShellAdapter
#[derive(Clone)]
pub struct TracedShellAdapter<S> {
    inner: S,
}

impl<S> TracedShellAdapter<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<S: ShellAdapter> ShellAdapter for TracedShellAdapter<S> {
    async fn run(&self, cmd: &ShellCommand) -> Result<ShellOutput, ShellError> {
        let span = tracing::info_span!("shell.run", cwd = %cmd.cwd.display());
        async {
            tracing::info!(cmd = %cmd.display(), env_count = cmd.env.len(), "starting");

            // Precondition: cwd must exist
            if !cmd.cwd.is_dir() {
                tracing::error!("working directory does not exist");
                return Err(ShellError::SpawnFailed {
                    program: cmd.argv.first().cloned().unwrap_or_default(),
                    reason: format!("working directory does not exist: {}", cmd.cwd.display()),
                });
            }

            let start = std::time::Instant::now();
            let result = self.inner.run(cmd).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(output) if output.succeeded() => tracing::info!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    stdout_len = output.stdout.len(),
                    "command succeeded"
                ),
                Ok(output) => tracing::warn!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    exit_code = ?output.exit_code,
                    "command failed"
                ),
                Err(e) => tracing::error!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "command aborted"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }
}

/// Wrapper that adds tracing to any StoreAdapter
#[derive(Clone)]
pub struct TracedStoreAdapter<T> {
    inner: T,
}

impl<T> TracedStoreAdapter<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<T: StoreAdapter> StoreAdapter for TracedStoreAdapter<T> {
    async fn put(&self, file: &Path, key: &str) -> Result<(), StoreError> {
        let span = tracing::info_span!("store.put", key, file = %file.display());
        async {
            let start = std::time::Instant::now();
            let result = self.inner.put(file, key).await;
            match &result {
                Ok(()) => tracing::info!(elapsed_ms = start.elapsed().as_millis() as u64, "uploaded"),
                Err(e) => tracing::error!(error = %e, "upload failed"),
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn copy(&self, from: &str, to: &str) -> Result<(), StoreError> {
        let span = tracing::info_span!("store.copy", from, to);
        async {
            let result = self.inner.copy(from, to).await;
            match &result {
                Ok(()) => tracing::info!("copied"),
                Err(e) => tracing::error!(error = %e, "copy failed"),
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        let span = tracing::info_span!("store.delete", key);
        async {
            let result = self.inner.delete(key).await;
            // Deleting a key that is already gone is usually harmless
            match &result {
                Ok(()) => tracing::info!("deleted"),
                Err(e) => tracing::warn!(error = %e, "delete failed"),
            }
            result
        }
        .instrument(span)
        .await
    }
}

/// Wrapper that adds tracing to any TransferAdapter
#[derive(Clone)]
pub struct TracedTransferAdapter<T> {
    inner: T,
}

impl<T> TracedTransferAdapter<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<T: TransferAdapter> TransferAdapter for TracedTransferAdapter<T> {
    async fn transfer(&self, src: &Path, dest: &Path) -> Result<u64, TransferError> {
        let span =
            tracing::info_span!("transfer", src = %src.display(), dest = %dest.display());
        async {
            let result = self.inner.transfer(src, dest).await;
            match &result {
                Ok(bytes) => tracing::info!(bytes, "transferred"),
                Err(e) => tracing::error!(error = %e, "transfer failed"),
            }
            result
        }
        .instrument(span)
        .await
    }
}

/// Wrapper that adds tracing to any DownloadAdapter
#[derive(Clone)]
pub struct TracedDownloadAdapter<D> {
    inner: D,
}

impl<D> TracedDownloadAdapter<D> {
    pub fn new(inner: D) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<D: DownloadAdapter> DownloadAdapter for TracedDownloadAdapter<D> {
    async fn download(&self, url: &str, dest: &Path) -> Result<u64, DownloadError> {
        let span = tracing::info_span!("download", url, dest = %dest.display());
        async {
            let start = std::time::Instant::now();
            let result = self.inner.download(url, dest).await;
            match &result {
                Ok(bytes) => tracing::info!(
                    bytes,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "downloaded"
                ),
                Err(e) => tracing::error!(error = %e, "download failed"),
            }
            result
        }
        .instrument(span)
        .await
    }
}

/// Wrapper that adds tracing to any TriggerAdapter
#[derive(Clone)]
pub struct TracedTriggerAdapter<T> {
    inner: T,
}

impl<T> TracedTriggerAdapter<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<T: TriggerAdapter> TriggerAdapter for TracedTriggerAdapter<T> {
    async fn fire(&self, trigger: &PipelineTrigger) -> Result<(), TriggerError> {
        let span = tracing::info_span!("trigger.fire", scheduler = %trigger.scheduler);
        async {
            let result = self.inner.fire(trigger).await;
            match &result {
                Ok(()) => tracing::info!(properties = trigger.properties.len(), "fired"),
                Err(e) => tracing::warn!(error = %e, "trigger failed"),
            }
            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
