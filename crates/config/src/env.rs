// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Environment overlays for build and test commands

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Variables to set and to remove for a family of commands
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvOverlay {
    pub set: BTreeMap<String, String>,
    pub unset: Vec<String>,
}

impl EnvOverlay {
    /// Overlay as `name -> Some(value)` to set, `name -> None` to remove
    pub fn entries(&self) -> BTreeMap<String, Option<String>> {
        let mut entries: BTreeMap<String, Option<String>> =
            self.unset.iter().map(|k| (k.clone(), None)).collect();
        entries.extend(self.set.iter().map(|(k, v)| (k.clone(), Some(v.clone()))));
        entries
    }
}

/// Overlays per pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvDef {
    pub package: EnvOverlay,
    pub test: EnvOverlay,
}

impl Default for EnvDef {
    fn default() -> Self {
        Self {
            package: EnvOverlay {
                set: BTreeMap::from([("JULIA_CPU_CORES".to_string(), "6".to_string())]),
                unset: vec!["CFLAGS".to_string(), "CPPFLAGS".to_string()],
            },
            test: EnvOverlay::default(),
        }
    }
}
