// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake transfer adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{TransferAdapter, TransferError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Recorded transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferCall {
    pub src: PathBuf,
    pub dest: PathBuf,
}

/// Fake transfer adapter for testing
#[derive(Clone, Default)]
pub struct FakeTransferAdapter {
    calls: Arc<Mutex<Vec<TransferCall>>>,
    failing: Arc<Mutex<bool>>,
}

impl FakeTransferAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every transfer fail
    pub fn fail(&self) {
        *self.failing.lock().unwrap_or_else(|e| e.into_inner()) = true;
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<TransferCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl TransferAdapter for FakeTransferAdapter {
    async fn transfer(&self, src: &Path, dest: &Path) -> Result<u64, TransferError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(TransferCall {
                src: src.to_path_buf(),
                dest: dest.to_path_buf(),
            });
        if *self.failing.lock().unwrap_or_else(|e| e.into_inner()) {
            return Err(TransferError::SourceMissing(src.display().to_string()));
        }
        Ok(0)
    }
}
