// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration TOML parsing

use crate::{defaults, BuilderDef, EnvDef, StorageDef, TimeoutsDef};
use nb_core::{ChangeFilter, Os};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Source repository settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceDef {
    /// Repository cloned when a run does not name one
    pub repository: String,
    /// Directory holding one checkout per builder
    pub workdir: PathBuf,
}

impl Default for SourceDef {
    fn default() -> Self {
        Self {
            repository: "git://github.com/JuliaLang/julia.git".to_string(),
            workdir: PathBuf::from("build"),
        }
    }
}

/// Downstream trigger settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggersDef {
    /// Directory triggers are spooled into for the scheduler to pick up
    pub spool_dir: PathBuf,
}

impl Default for TriggersDef {
    fn default() -> Self {
        Self {
            spool_dir: PathBuf::from("triggers"),
        }
    }
}

/// Complete, immutable configuration assembled at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub builders: BTreeMap<String, BuilderDef>,
    pub storage: StorageDef,
    pub changes: ChangeFilter,
    pub source: SourceDef,
    pub env: EnvDef,
    pub timeouts: TimeoutsDef,
    pub triggers: TriggersDef,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            builders: defaults::builders()
                .into_iter()
                .map(|b| (b.name.clone(), b))
                .collect(),
            storage: StorageDef::default(),
            changes: ChangeFilter::default(),
            source: SourceDef::default(),
            env: EnvDef::default(),
            timeouts: TimeoutsDef::default(),
            triggers: TriggersDef::default(),
        }
    }
}

impl Config {
    /// Get a builder definition by name
    pub fn get_builder(&self, name: &str) -> Option<&BuilderDef> {
        self.builders.get(name)
    }

    /// Load from an explicit path, or from the default location when present,
    /// or fall back to the built-in configuration.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => load_file(path),
            None => match default_path() {
                Some(path) if path.exists() => load_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }
}

/// `$XDG_CONFIG_HOME/nb/nb.toml` or the platform equivalent
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("nb").join("nb.toml"))
}

fn load_file(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content)
}

/// Parse configuration from TOML content.
///
/// Sections that are absent keep their built-in defaults. A `[builder]`
/// table replaces the built-in inventory entirely.
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let raw: toml::Value = toml::from_str(content)?;
    let table = raw
        .as_table()
        .ok_or_else(|| ConfigError::InvalidFormat("root must be a table".to_string()))?;

    let mut config = Config::default();

    if let Some(builders) = table.get("builder") {
        let builders = builders
            .as_table()
            .ok_or_else(|| ConfigError::InvalidFormat("builder must be a table".to_string()))?;
        config.builders = builders
            .iter()
            .map(|(name, value)| parse_builder(name, value).map(|b| (name.clone(), b)))
            .collect::<Result<_, _>>()?;
    }

    if let Some(value) = table.get("storage") {
        config.storage = parse_section("storage", value)?;
        if config.storage.attempts == 0 {
            return Err(ConfigError::InvalidFormat(
                "storage.attempts must be at least 1".to_string(),
            ));
        }
    }
    if let Some(value) = table.get("changes") {
        config.changes = parse_section("changes", value)?;
    }
    if let Some(value) = table.get("source") {
        config.source = parse_section("source", value)?;
    }
    if let Some(value) = table.get("env") {
        config.env = parse_section("env", value)?;
    }
    if let Some(value) = table.get("timeouts") {
        config.timeouts = parse_section("timeouts", value)?;
    }
    if let Some(value) = table.get("triggers") {
        config.triggers = parse_section("triggers", value)?;
    }

    Ok(config)
}

fn parse_section<T: DeserializeOwned>(name: &str, value: &toml::Value) -> Result<T, ConfigError> {
    value
        .clone()
        .try_into()
        .map_err(|e: toml::de::Error| ConfigError::InvalidFormat(format!("{}: {}", name, e)))
}

fn parse_builder(name: &str, value: &toml::Value) -> Result<BuilderDef, ConfigError> {
    let mut builder: BuilderDef = parse_section(&format!("builder.{}", name), value)?;
    builder.name = name.to_string();

    if Os::from_name(&builder.platform.os_name).is_none() {
        return Err(ConfigError::InvalidFormat(format!(
            "builder.{}.os_name: unrecognized os {:?}",
            name, builder.platform.os_name
        )));
    }
    Ok(builder)
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
