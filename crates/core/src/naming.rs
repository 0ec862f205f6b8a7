// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Artifact filename and object-store path derivation
//!
//! The build system has used two naming conventions over time. Newer trees
//! report their distribution filename through
//! `make print-JULIA_BINARYDIST_FILENAME`; older trees report nothing useful
//! and the name has to be reconstructed per platform. Whatever the local
//! name, the uploaded name is always the canonical
//! `julia-{shortcommit}-{os_name}{bits}.{ext}`.

use crate::context::{ArtifactNames, BuildContext};
use crate::platform::Os;
use thiserror::Error;

/// Marker printed by `make print-JULIA_BINARYDIST_FILENAME`
pub const BINARYDIST_MARKER: &str = "JULIA_BINARYDIST_FILENAME=";

/// Filename prefix replaced by `julia-latest-` for the latest alias
pub const VERSIONED_PREFIX: &str = "julia-";

/// Errors from deriving names and paths
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NamingError {
    #[error("missing build property: {0}")]
    Missing(&'static str),
    #[error("unrecognized os_name: {0}")]
    UnknownOs(String),
}

/// Path of the packaged artifact on the build machine
pub fn local_filename(ctx: &BuildContext) -> Result<String, NamingError> {
    let report = ctx
        .artifact_report()
        .ok_or(NamingError::Missing("artifact_filename"))?
        .trim();
    let ext = &ctx.platform.os_pkg_ext;

    if let Some(payload) = report.strip_prefix(BINARYDIST_MARKER) {
        if !payload.is_empty() {
            return Ok(format!("{}.{}", payload, ext));
        }
    }

    let version = ctx.version().ok_or(NamingError::Missing("version"))?;
    let platform = &ctx.platform;

    if platform.is_mac() {
        Ok(format!(
            "contrib/mac/app/Julia-{}-{}.{}",
            version.version, version.shortcommit, ext
        ))
    } else if platform.is_windows() {
        Ok(format!(
            "julia-{}-{}.{}",
            version.version, platform.tar_arch, ext
        ))
    } else {
        // Older Linux tarballs were published as `arm`, not `armv7l`
        let arch = match platform.tar_arch.as_str() {
            "armv7l" => "arm",
            other => other,
        };
        Ok(format!(
            "julia-{}-Linux-{}.{}",
            version.shortcommit, arch, ext
        ))
    }
}

/// Canonical filename of the artifact in the object store
pub fn upload_filename(ctx: &BuildContext) -> Result<String, NamingError> {
    let shortcommit = ctx.shortcommit().ok_or(NamingError::Missing("shortcommit"))?;
    let platform = &ctx.platform;
    Ok(format!(
        "julia-{}-{}{}.{}",
        shortcommit, platform.os_name, platform.bits, platform.os_pkg_ext
    ))
}

/// Derive both filenames in one step
pub fn artifact_names(ctx: &BuildContext) -> Result<ArtifactNames, NamingError> {
    Ok(ArtifactNames {
        local_filename: local_filename(ctx)?,
        upload_filename: upload_filename(ctx)?,
    })
}

/// Filename of the "latest" alias for an upload filename.
///
/// Names without the `julia-` prefix are returned unchanged.
pub fn latest_filename(upload_filename: &str) -> String {
    match upload_filename.strip_prefix(VERSIONED_PREFIX) {
        Some(rest) => format!("{}latest-{}", VERSIONED_PREFIX, rest),
        None => upload_filename.to_string(),
    }
}

/// `{base}/bin/{os}/{arch}/{majmin}/{upload_filename}`
pub fn upload_path(ctx: &BuildContext, base: &str) -> Result<String, NamingError> {
    let os = upload_os(ctx)?;
    let majmin = &ctx.version().ok_or(NamingError::Missing("majmin"))?.majmin;
    let filename = uploaded_name(ctx)?;
    Ok(format!(
        "{}/bin/{}/{}/{}/{}",
        base,
        os.upload_dir(),
        ctx.platform.up_arch,
        majmin,
        filename
    ))
}

/// `{base}/bin/{os}/{arch}/julia-latest-...`
pub fn latest_upload_path(ctx: &BuildContext, base: &str) -> Result<String, NamingError> {
    let os = upload_os(ctx)?;
    let filename = latest_filename(uploaded_name(ctx)?);
    Ok(format!(
        "{}/bin/{}/{}/{}",
        base,
        os.upload_dir(),
        ctx.platform.up_arch,
        filename
    ))
}

/// Public URL of an object-store key
pub fn download_url(download_base: &str, key: &str) -> String {
    format!(
        "{}/{}",
        download_base.trim_end_matches('/'),
        key.trim_start_matches('/')
    )
}

fn upload_os(ctx: &BuildContext) -> Result<Os, NamingError> {
    ctx.platform
        .os()
        .ok_or_else(|| NamingError::UnknownOs(ctx.platform.os_name.clone()))
}

fn uploaded_name(ctx: &BuildContext) -> Result<&str, NamingError> {
    ctx.names()
        .map(|n| n.upload_filename.as_str())
        .ok_or(NamingError::Missing("upload_filename"))
}

#[cfg(test)]
#[path = "naming_tests.rs"]
mod tests;
