// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Artifact download adapters

mod http;

pub use http::HttpDownloader;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeDownloadAdapter;

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

/// Errors from downloading an artifact
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("request for {url} failed: {reason}")]
    Request { url: String, reason: String },
    #[error("io error: {0}")]
    Io(String),
}

/// Adapter for fetching an artifact by URL
#[async_trait]
pub trait DownloadAdapter: Clone + Send + Sync + 'static {
    /// Download `url` to `dest`, replacing it. Returns bytes written.
    async fn download(&self, url: &str, dest: &Path) -> Result<u64, DownloadError>;
}
