// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stage timeouts

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timeouts for long-running stages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeoutsDef {
    /// Output silence allowed during build, package and packager test stages
    #[serde(with = "humantime_serde")]
    pub build_silence: Duration,
    /// Output silence allowed while the tester runs the suite
    #[serde(with = "humantime_serde")]
    pub test_silence: Duration,
    /// Wall-clock ceiling of the tester's suite run
    #[serde(with = "humantime_serde")]
    pub test_max: Duration,
    /// Grace between SIGTERM and SIGKILL
    #[serde(with = "humantime_serde")]
    pub sigterm_grace: Duration,
    /// Output silence allowed for any other command
    #[serde(with = "humantime_serde")]
    pub default_silence: Duration,
}

impl Default for TimeoutsDef {
    fn default() -> Self {
        Self {
            build_silence: Duration::from_secs(60 * 60),
            test_silence: Duration::from_secs(45 * 60),
            test_max: Duration::from_secs(10 * 60 * 60),
            sigterm_grace: Duration::from_secs(10),
            default_silence: Duration::from_secs(20 * 60),
        }
    }
}
