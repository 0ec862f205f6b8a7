// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-builder workspaces

use crate::stage::PipelineKind;
use nb_config::{BuilderDef, Config};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Workspace of a builder's packager or tester runs.
///
/// Packager and tester runs of one builder never share a directory, so the
/// tester's clean step cannot wipe a checkout.
pub fn workspace_dir(config: &Config, builder: &BuilderDef, kind: PipelineKind) -> PathBuf {
    let name = match kind {
        PipelineKind::Packager => builder.packager_name(),
        PipelineKind::Tester => builder.tester_name(),
    };
    config.source.workdir.join(name)
}

/// Create the workspace and the coordinator staging directory
pub fn prepare_workspace(workspace: &Path, staging_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(workspace)?;
    fs::create_dir_all(staging_dir)?;
    Ok(())
}

#[cfg(test)]
#[path = "workspace_tests.rs"]
mod tests;
