// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The packager and tester stage lists

use crate::stage::{Condition, FailurePolicy, Pipeline, PipelineKind, Stage, StageKind};
use nb_config::Config;

fn make(name: &str, targets: &str, jobs: Option<u32>, config: &Config) -> Stage {
    Stage::new(
        name,
        StageKind::Make {
            targets: targets.to_string(),
            jobs,
            silence: config.timeouts.build_silence,
        },
    )
}

/// Build, test, package and upload one revision on one builder
pub fn packager_pipeline(config: &Config) -> Pipeline {
    use Condition::*;
    use FailurePolicy::*;

    let stages = vec![
        // A fresh workspace has nothing to fetch into
        Stage::new("git fetch", StageKind::Fetch).on_failure(Ignore),
        Stage::new("checkout", StageKind::Checkout),
        Stage::new("brew deps", StageKind::BrewDeps)
            .when(IsMac)
            .on_failure(Ignore),
        make("make cleanall", "cleanall", None, config).on_failure(Flunk),
        make("make", "debug release", Some(3), config),
        make("make testall", "testall", None, config),
        make("make win-extras", "win-extras", None, config).when(IsWindows),
        Stage::new("commit metadata", StageKind::CommitMetadata),
        Stage::new("version", StageKind::Version),
        Stage::new("artifact report", StageKind::ArtifactReport),
        Stage::new("derive names", StageKind::DeriveNames),
        make("make binary-dist", "binary-dist", None, config),
        Stage::new("make app", StageKind::MakeApp).when(IsMac),
        Stage::new("transfer", StageKind::Transfer),
        Stage::new("upload", StageKind::Upload { latest: false }).when(ShouldUpload),
        Stage::new("upload latest", StageKind::Upload { latest: true }).when(ShouldUploadLatest),
        Stage::new("cleanup coordinator", StageKind::CleanupCoordinator)
            .when(ShouldUpload)
            .on_failure(Ignore),
        Stage::new("trigger tests", StageKind::TriggerTests)
            .when(ShouldTriggerTests)
            .on_failure(Ignore),
        Stage::new("trigger coverage", StageKind::TriggerCoverage)
            .when(ShouldRunCoverage)
            .on_failure(Ignore),
    ];

    Pipeline {
        kind: PipelineKind::Packager,
        stages,
    }
}

/// Test an uploaded artifact and promote it on success
pub fn tester_pipeline(config: &Config) -> Pipeline {
    use Condition::*;
    use FailurePolicy::*;

    let stages = vec![
        Stage::new("clean workspace", StageKind::CleanWorkspace).on_failure(Ignore),
        Stage::new("download", StageKind::Download),
        Stage::new("extract", StageKind::Extract),
        Stage::new(
            "run tests",
            StageKind::RunTests {
                silence: config.timeouts.test_silence,
                max_time: config.timeouts.test_max,
            },
        ),
        Stage::new("promote", StageKind::Promote { latest: false }).when(ShouldPromote),
        Stage::new("promote latest", StageKind::Promote { latest: true }).when(ShouldPromote),
        Stage::new("cleanup pretesting", StageKind::CleanupPretesting)
            .when(ShouldPromote)
            .on_failure(Ignore),
        Stage::new("trigger coverage", StageKind::TriggerCoverage)
            .when(IsAssertNightly)
            .on_failure(Ignore),
        Stage::new("trigger non-assert build", StageKind::TriggerNonAssert)
            .when(IsAssertNightly)
            .on_failure(Ignore),
    ];

    Pipeline {
        kind: PipelineKind::Tester,
        stages,
    }
}

#[cfg(test)]
#[path = "pipelines_tests.rs"]
mod tests;
