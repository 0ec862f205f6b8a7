// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Artifact transfer from the build workspace to the coordinator

mod local;

pub use local::LocalTransfer;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeTransferAdapter, TransferCall};

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

/// Errors from transferring an artifact
#[derive(Debug, Error)]
pub enum TransferError {
    #[error("source not found: {0}")]
    SourceMissing(String),
    #[error("io error: {0}")]
    Io(String),
}

/// Adapter for moving a packaged artifact to the coordinator
#[async_trait]
pub trait TransferAdapter: Clone + Send + Sync + 'static {
    /// Copy `src` to `dest`, creating parent directories. Returns bytes copied.
    async fn transfer(&self, src: &Path, dest: &Path) -> Result<u64, TransferError>;
}
