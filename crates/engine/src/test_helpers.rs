// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared builders for engine tests
#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{
    packager_pipeline, tester_pipeline, workspace_dir, PipelineKind, RunReport, RunRequest,
    Runner, RuntimeDeps,
};
use nb_adapters::{
    FakeDownloadAdapter, FakeShellAdapter, FakeStoreAdapter, FakeTransferAdapter,
    FakeTriggerAdapter,
};
use nb_config::{BuilderDef, Config};
use nb_core::{fixtures, BuildContext, PlatformFacts};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub fn builder(name: &str, platform: PlatformFacts) -> BuilderDef {
    BuilderDef {
        name: name.to_string(),
        worker: format!("{}-worker", name),
        platform,
        upload: true,
        tested: true,
        coverage: false,
        nthreads: 2,
        maxrss: None,
        llvm_cmake: None,
    }
}

pub fn linux64() -> BuilderDef {
    builder("linux64", fixtures::linux64())
}

pub fn mac64() -> BuilderDef {
    builder("macos64", fixtures::mac64())
}

pub fn win64() -> BuilderDef {
    builder("win64", fixtures::win64())
}

/// A `build_*` builder: no upload, no testing
pub fn build_only() -> BuilderDef {
    BuilderDef {
        upload: false,
        tested: false,
        ..builder("build_ubuntu64", fixtures::linux64())
    }
}

/// Fake adapters, a scratch directory and a config pointing into it
pub struct Harness {
    pub shell: FakeShellAdapter,
    pub store: FakeStoreAdapter,
    pub transfer: FakeTransferAdapter,
    pub download: FakeDownloadAdapter,
    pub triggers: FakeTriggerAdapter,
    pub config: Arc<Config>,
    pub dir: TempDir,
}

pub type FakeRunner = Runner<
    FakeShellAdapter,
    FakeStoreAdapter,
    FakeTransferAdapter,
    FakeDownloadAdapter,
    FakeTriggerAdapter,
>;

pub const VERSION_OUTPUT: &str = "1.7.2\nabc1234567\n";
pub const COMMIT_OUTPUT: &str = "Fix the thing\nCommitter\nc@example.com\nAuthor\na@example.com";
pub const BINARYDIST_OUTPUT: &str = "JULIA_BINARYDIST_FILENAME=julia-1.7.2-linux-x86_64\n";

pub const PRETESTING_KEY: &str =
    "julialangnightlies/pretesting/bin/linux/x64/1.7/julia-abc1234567-linux64.tar.gz";
pub const NIGHTLY_KEY: &str = "julialangnightlies/bin/linux/x64/1.7/julia-abc1234567-linux64.tar.gz";
pub const LATEST_KEY: &str = "julialangnightlies/bin/linux/x64/julia-latest-linux64.tar.gz";

pub fn url(key: &str) -> String {
    format!("https://s3.amazonaws.com/{}", key)
}

impl Harness {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap_or_else(|e| panic!("tempdir: {}", e));
        let mut config = Config::default();
        config.storage.staging_dir = dir.path().join("staging");
        config.source.workdir = dir.path().join("build");

        let harness = Self {
            shell: FakeShellAdapter::new(),
            store: FakeStoreAdapter::new(),
            transfer: FakeTransferAdapter::new(),
            download: FakeDownloadAdapter::new(),
            triggers: FakeTriggerAdapter::new(),
            config: Arc::new(config),
            dir,
        };
        harness.shell.stdout("git log", COMMIT_OUTPUT);
        harness.shell.stdout("usr/bin/julia", VERSION_OUTPUT);
        harness
            .shell
            .stdout("print-JULIA_BINARYDIST_FILENAME", BINARYDIST_OUTPUT);
        harness
    }

    pub fn runner(&self) -> FakeRunner {
        Runner::new(
            RuntimeDeps {
                shell: self.shell.clone(),
                store: self.store.clone(),
                transfer: self.transfer.clone(),
                download: self.download.clone(),
                triggers: self.triggers.clone(),
            },
            Arc::clone(&self.config),
        )
    }

    pub fn request(&self, builder: BuilderDef, ctx: BuildContext, kind: PipelineKind) -> RunRequest {
        RunRequest {
            workspace: workspace_dir(&self.config, &builder, kind),
            builder,
            ctx,
        }
    }

    pub fn staged(&self, name: &str) -> PathBuf {
        self.config.storage.staging_dir.join(name)
    }

    /// Run the packager for `builder` on master
    pub async fn package(&self, builder: BuilderDef) -> RunReport {
        let ctx = builder.context().with_branch("master");
        let request = self.request(builder, ctx, PipelineKind::Packager);
        self.runner()
            .run(&packager_pipeline(&self.config), request)
            .await
            .unwrap_or_else(|e| panic!("run: {}", e))
    }

    /// Run the tester for `builder` against `url`
    pub async fn test(&self, builder: BuilderDef, url: &str, assert_build: bool) -> RunReport {
        let mut ctx = builder.context().with_url(url);
        ctx.assert_build = assert_build;
        ctx.known_shortcommit = Some("abc1234567".to_string());
        let request = self.request(builder, ctx, PipelineKind::Tester);
        self.runner()
            .run(&tester_pipeline(&self.config), request)
            .await
            .unwrap_or_else(|e| panic!("run: {}", e))
    }
}
