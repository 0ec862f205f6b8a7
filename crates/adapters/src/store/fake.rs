// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake object store for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{StoreAdapter, StoreError};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Recorded store call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    Put { file: PathBuf, key: String },
    Copy { from: String, to: String },
    Delete { key: String },
}

/// In-memory object store mapping keys to the file they were uploaded from
#[derive(Clone, Default)]
pub struct FakeStoreAdapter {
    objects: Arc<Mutex<BTreeMap<String, PathBuf>>>,
    failing: Arc<Mutex<HashSet<&'static str>>>,
    calls: Arc<Mutex<Vec<StoreCall>>>,
}

impl FakeStoreAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an object
    pub fn insert(&self, key: &str, file: impl Into<PathBuf>) {
        self.objects
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), file.into());
    }

    /// Make every call of `op` (`put`, `copy`, `delete`) fail
    pub fn fail(&self, op: &'static str) {
        self.failing
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(op);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.objects
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains_key(key)
    }

    /// All stored keys in order
    pub fn keys(&self) -> Vec<String> {
        self.objects
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .keys()
            .cloned()
            .collect()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn record(&self, call: StoreCall, op: &'static str) -> Result<(), StoreError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(call);
        if self
            .failing
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(op)
        {
            return Err(StoreError::CommandFailed {
                op,
                attempts: 1,
                reason: "injected failure".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl StoreAdapter for FakeStoreAdapter {
    async fn put(&self, file: &Path, key: &str) -> Result<(), StoreError> {
        self.record(
            StoreCall::Put {
                file: file.to_path_buf(),
                key: key.to_string(),
            },
            "put",
        )?;
        self.insert(key, file);
        Ok(())
    }

    async fn copy(&self, from: &str, to: &str) -> Result<(), StoreError> {
        self.record(
            StoreCall::Copy {
                from: from.to_string(),
                to: to.to_string(),
            },
            "copy",
        )?;
        let mut objects = self.objects.lock().unwrap_or_else(|e| e.into_inner());
        let source = objects
            .get(from)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(from.to_string()))?;
        objects.insert(to.to_string(), source);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.record(
            StoreCall::Delete {
                key: key.to_string(),
            },
            "delete",
        )?;
        self.objects
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
