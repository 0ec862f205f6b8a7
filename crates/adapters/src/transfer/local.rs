// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Local filesystem transfer

use super::{TransferAdapter, TransferError};
use async_trait::async_trait;
use std::path::Path;

/// Transfer by filesystem copy, for workers that share a filesystem with
/// the coordinator.
#[derive(Clone, Default)]
pub struct LocalTransfer;

impl LocalTransfer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TransferAdapter for LocalTransfer {
    async fn transfer(&self, src: &Path, dest: &Path) -> Result<u64, TransferError> {
        if !tokio::fs::try_exists(src).await.unwrap_or(false) {
            return Err(TransferError::SourceMissing(src.display().to_string()));
        }
        if let Some(parent) = dest.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| TransferError::Io(format!("{}: {}", parent.display(), e)))?;
        }
        tokio::fs::copy(src, dest)
            .await
            .map_err(|e| TransferError::Io(e.to_string()))
    }
}

#[cfg(test)]
#[path = "local_tests.rs"]
mod tests;
