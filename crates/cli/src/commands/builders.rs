// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `nb builders` - List the builder inventory

use crate::output::{self, OutputFormat};
use nb_config::{BuilderDef, Config};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Serialize)]
pub struct BuilderRow {
    pub name: String,
    pub worker: String,
    pub os: String,
    pub arch: String,
    pub ext: String,
    pub upload: bool,
    pub tested: bool,
    pub coverage: bool,
}

impl From<&BuilderDef> for BuilderRow {
    fn from(b: &BuilderDef) -> Self {
        Self {
            name: b.name.clone(),
            worker: b.worker.clone(),
            os: b.platform.os_name.clone(),
            arch: b.platform.up_arch.clone(),
            ext: b.platform.os_pkg_ext.clone(),
            upload: b.upload,
            tested: b.tested,
            coverage: b.coverage,
        }
    }
}

impl fmt::Display for BuilderRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut flags = Vec::new();
        if self.upload {
            flags.push("upload");
        }
        if self.tested {
            flags.push("tested");
        }
        if self.coverage {
            flags.push("coverage");
        }
        write!(
            f,
            "{:<16} {:<20} {:<8} {:<8} {:<7} {}",
            self.name,
            self.worker,
            self.os,
            self.arch,
            self.ext,
            flags.join(",")
        )
    }
}

pub fn rows(config: &Config) -> Vec<BuilderRow> {
    config.builders.values().map(BuilderRow::from).collect()
}

pub fn handle(config: &Config, format: OutputFormat) {
    output::print_list(&rows(config), format);
}
