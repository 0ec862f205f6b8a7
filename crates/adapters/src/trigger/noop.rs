// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op trigger adapter for local runs.

use super::{TriggerAdapter, TriggerError};
use async_trait::async_trait;
use nb_core::PipelineTrigger;

/// Trigger adapter that drops every trigger.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpTriggerAdapter;

impl NoOpTriggerAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TriggerAdapter for NoOpTriggerAdapter {
    async fn fire(&self, _trigger: &PipelineTrigger) -> Result<(), TriggerError> {
        Ok(())
    }
}
