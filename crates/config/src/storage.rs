// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Object store configuration

use nb_core::StorageLayout;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where artifacts go and how the store is driven
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageDef {
    #[serde(flatten)]
    pub layout: StorageLayout,
    /// Coordinator directory artifacts are transferred into before upload
    pub staging_dir: PathBuf,
    /// Public put; placeholders `{key}` and `{file}`
    pub put: String,
    /// Server-side copy; placeholders `{from}` and `{to}`
    pub copy: String,
    /// Delete; placeholder `{key}`
    pub delete: String,
    /// Attempts per store command before giving up
    pub attempts: u32,
}

impl Default for StorageDef {
    fn default() -> Self {
        Self {
            layout: StorageLayout::default(),
            staging_dir: PathBuf::from("/tmp/julia_package"),
            put: "${NB_AWS:-~/bin/aws} put --fail --public {key} {file}".to_string(),
            copy: "${NB_AWS:-~/bin/aws} cp --public {from} {to}".to_string(),
            delete: "${NB_AWS:-~/bin/aws} rm {key}".to_string(),
            attempts: 3,
        }
    }
}
