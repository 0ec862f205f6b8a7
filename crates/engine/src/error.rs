// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the engine runtime

use std::path::PathBuf;
use thiserror::Error;

/// Errors that prevent a run from starting
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("cannot prepare workspace {path}: {source}")]
    Workspace {
        path: PathBuf,
        source: std::io::Error,
    },
}
