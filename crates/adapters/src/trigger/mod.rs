// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Downstream trigger adapters

mod noop;
mod spool;

pub use noop::NoOpTriggerAdapter;
pub use spool::{read_spooled, SpoolTrigger};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeTriggerAdapter;

use async_trait::async_trait;
use nb_core::PipelineTrigger;
use thiserror::Error;

/// Errors from firing a trigger
#[derive(Debug, Error)]
pub enum TriggerError {
    #[error("io error: {0}")]
    Io(String),
    #[error("invalid trigger: {0}")]
    Invalid(String),
}

/// Adapter for starting downstream pipelines.
///
/// Implementations return as soon as the trigger is handed off.
#[async_trait]
pub trait TriggerAdapter: Clone + Send + Sync + 'static {
    async fn fire(&self, trigger: &PipelineTrigger) -> Result<(), TriggerError>;
}
