// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Pipeline configuration: builders, storage, policies, templates

mod builder;
mod defaults;
mod env;
mod parser;
mod storage;
mod template;
mod timeouts;

pub use builder::BuilderDef;
pub use env::{EnvDef, EnvOverlay};
pub use parser::{default_path, parse_config, Config, ConfigError, SourceDef, TriggersDef};
pub use storage::StorageDef;
pub use template::{render, shell_quote, TemplateError};
pub use timeouts::TimeoutsDef;
