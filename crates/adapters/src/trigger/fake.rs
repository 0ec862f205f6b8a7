// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake trigger adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{TriggerAdapter, TriggerError};
use async_trait::async_trait;
use nb_core::PipelineTrigger;
use std::sync::{Arc, Mutex};

/// Fake trigger adapter recording fired triggers
#[derive(Clone, Default)]
pub struct FakeTriggerAdapter {
    fired: Arc<Mutex<Vec<PipelineTrigger>>>,
    failing: Arc<Mutex<bool>>,
}

impl FakeTriggerAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every trigger fail after recording it
    pub fn fail(&self) {
        *self.failing.lock().unwrap_or_else(|e| e.into_inner()) = true;
    }

    pub fn fired(&self) -> Vec<PipelineTrigger> {
        self.fired.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Schedulers of fired triggers, in order
    pub fn schedulers(&self) -> Vec<String> {
        self.fired().into_iter().map(|t| t.scheduler).collect()
    }
}

#[async_trait]
impl TriggerAdapter for FakeTriggerAdapter {
    async fn fire(&self, trigger: &PipelineTrigger) -> Result<(), TriggerError> {
        self.fired
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(trigger.clone());
        if *self.failing.lock().unwrap_or_else(|e| e.into_inner()) {
            return Err(TriggerError::Io("scheduler unavailable".to_string()));
        }
        Ok(())
    }
}
