// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP downloader

use super::{DownloadAdapter, DownloadError};
use async_trait::async_trait;
use std::path::Path;

/// Blocking HTTP GET run on tokio's blocking pool
#[derive(Clone, Default)]
pub struct HttpDownloader;

impl HttpDownloader {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DownloadAdapter for HttpDownloader {
    async fn download(&self, url: &str, dest: &Path) -> Result<u64, DownloadError> {
        let url = url.to_string();
        let dest = dest.to_path_buf();

        tokio::task::spawn_blocking(move || {
            if let Some(parent) = dest.parent() {
                std::fs::create_dir_all(parent).map_err(|e| DownloadError::Io(e.to_string()))?;
            }
            let request_failed = |reason: String| DownloadError::Request {
                url: url.clone(),
                reason,
            };

            let mut response = ureq::get(&url)
                .call()
                .map_err(|e| request_failed(e.to_string()))?;
            let mut file =
                std::fs::File::create(&dest).map_err(|e| DownloadError::Io(e.to_string()))?;
            let mut reader = response.body_mut().as_reader();
            std::io::copy(&mut reader, &mut file).map_err(|e| request_failed(e.to_string()))
        })
        .await
        .map_err(|e| DownloadError::Io(e.to_string()))?
    }
}
