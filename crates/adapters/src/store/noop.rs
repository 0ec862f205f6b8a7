// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op store adapter for dry runs.

use super::{StoreAdapter, StoreError};
use async_trait::async_trait;
use std::path::Path;

/// Store adapter that accepts every operation and stores nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpStoreAdapter;

impl NoOpStoreAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl StoreAdapter for NoOpStoreAdapter {
    async fn put(&self, _file: &Path, _key: &str) -> Result<(), StoreError> {
        Ok(())
    }

    async fn copy(&self, _from: &str, _to: &str) -> Result<(), StoreError> {
        Ok(())
    }

    async fn delete(&self, _key: &str) -> Result<(), StoreError> {
        Ok(())
    }
}
