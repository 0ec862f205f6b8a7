// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Object store adapters

mod command;
mod noop;

pub use command::CommandStore;
pub use noop::NoOpStoreAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeStoreAdapter, StoreCall};

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

/// Errors from object store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{op} failed after {attempts} attempt(s): {reason}")]
    CommandFailed {
        op: &'static str,
        attempts: u32,
        reason: String,
    },
    #[error("key not found: {0}")]
    NotFound(String),
    #[error("invalid command template: {0}")]
    Template(String),
}

/// Adapter for the artifact object store.
///
/// Writes to an existing key overwrite it.
#[async_trait]
pub trait StoreAdapter: Clone + Send + Sync + 'static {
    /// Upload a local file to `key` with public read access
    async fn put(&self, file: &Path, key: &str) -> Result<(), StoreError>;

    /// Server-side copy of `from` to `to` with public read access
    async fn copy(&self, from: &str, to: &str) -> Result<(), StoreError>;

    /// Remove `key`
    async fn delete(&self, key: &str) -> Result<(), StoreError>;
}
