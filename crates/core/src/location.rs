// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Artifact locations in the object store

use crate::context::BuildContext;
use crate::naming::{self, NamingError};
use serde::{Deserialize, Serialize};

/// Where an artifact lives in the object store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactLocation {
    /// Built, not yet tested
    Pretesting,
    /// Passed the test suite
    Nightly,
    /// Unversioned alias of the most recent nightly
    NightlyLatest,
}

impl ArtifactLocation {
    pub fn name(&self) -> &'static str {
        match self {
            ArtifactLocation::Pretesting => "pretesting",
            ArtifactLocation::Nightly => "nightly",
            ArtifactLocation::NightlyLatest => "nightly-latest",
        }
    }
}

impl std::fmt::Display for ArtifactLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Key prefixes and public endpoint of the object store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageLayout {
    /// Key prefix for untested artifacts
    pub pretesting_base: String,
    /// Key prefix for promoted artifacts
    pub nightly_base: String,
    /// Public endpoint that serves keys over HTTP
    pub download_base: String,
}

impl Default for StorageLayout {
    fn default() -> Self {
        Self {
            pretesting_base: "julialangnightlies/pretesting".to_string(),
            nightly_base: "julialangnightlies".to_string(),
            download_base: "https://s3.amazonaws.com".to_string(),
        }
    }
}

impl StorageLayout {
    fn base(&self, location: ArtifactLocation) -> &str {
        match location {
            ArtifactLocation::Pretesting => &self.pretesting_base,
            ArtifactLocation::Nightly | ArtifactLocation::NightlyLatest => &self.nightly_base,
        }
    }

    /// Object-store key of a packaged artifact
    pub fn key(&self, location: ArtifactLocation, ctx: &BuildContext) -> Result<String, NamingError> {
        let base = self.base(location);
        match location {
            ArtifactLocation::NightlyLatest => naming::latest_upload_path(ctx, base),
            _ => naming::upload_path(ctx, base),
        }
    }

    /// Public URL of a packaged artifact
    pub fn url(&self, location: ArtifactLocation, ctx: &BuildContext) -> Result<String, NamingError> {
        Ok(naming::download_url(&self.download_base, &self.key(location, ctx)?))
    }

    /// Classify a download URL back into a location and key.
    ///
    /// Returns `None` for URLs outside the download endpoint.
    pub fn locate(&self, url: &str) -> Option<(ArtifactLocation, String)> {
        let base = self.download_base.trim_end_matches('/');
        let key = url.strip_prefix(base)?.trim_start_matches('/');

        // Pretesting is checked first since it usually nests under the nightly prefix
        if under(key, &self.pretesting_base) {
            return Some((ArtifactLocation::Pretesting, key.to_string()));
        }
        if under(key, &self.nightly_base) {
            let filename = key.rsplit('/').next().unwrap_or(key);
            let location = if filename.starts_with("julia-latest-") {
                ArtifactLocation::NightlyLatest
            } else {
                ArtifactLocation::Nightly
            };
            return Some((location, key.to_string()));
        }
        None
    }

    /// Keys a pretesting artifact is promoted to: (nightly, nightly-latest)
    pub fn promotion_keys(&self, pretesting_key: &str) -> Option<(String, String)> {
        let rest = pretesting_key
            .strip_prefix(self.pretesting_base.trim_end_matches('/'))?
            .trim_start_matches('/');
        let nightly = format!("{}/{}", self.nightly_base.trim_end_matches('/'), rest);

        // bin/{os}/{arch}/{majmin}/{file} -> bin/{os}/{arch}/{latest file}
        let (dir, filename) = nightly.rsplit_once('/')?;
        let (arch_dir, _majmin) = dir.rsplit_once('/')?;
        let latest = format!("{}/{}", arch_dir, naming::latest_filename(filename));
        Some((nightly, latest))
    }
}

fn under(key: &str, base: &str) -> bool {
    let base = base.trim_end_matches('/');
    key.strip_prefix(base)
        .is_some_and(|rest| rest.starts_with('/'))
}

#[cfg(test)]
#[path = "location_tests.rs"]
mod tests;
