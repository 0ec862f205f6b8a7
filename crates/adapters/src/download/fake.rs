// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake download adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{DownloadAdapter, DownloadError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Fake download adapter serving canned bodies.
///
/// Unknown URLs fail. Nothing is written to disk.
#[derive(Clone, Default)]
pub struct FakeDownloadAdapter {
    bodies: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    calls: Arc<Mutex<Vec<(String, PathBuf)>>>,
}

impl FakeDownloadAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn serve(&self, url: &str, body: impl Into<Vec<u8>>) {
        self.bodies
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(url.to_string(), body.into());
    }

    /// Recorded `(url, dest)` pairs
    pub fn calls(&self) -> Vec<(String, PathBuf)> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl DownloadAdapter for FakeDownloadAdapter {
    async fn download(&self, url: &str, dest: &Path) -> Result<u64, DownloadError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((url.to_string(), dest.to_path_buf()));
        self.bodies
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(url)
            .map(|body| body.len() as u64)
            .ok_or_else(|| DownloadError::Request {
                url: url.to_string(),
                reason: "http status: 404".to_string(),
            })
    }
}
