// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command template rendering

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use thiserror::Error;

// Regex pattern for {variable_name} - this is a constant valid pattern
// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([a-zA-Z_][a-zA-Z0-9_]*)\}").expect("constant regex pattern is valid")
});

// Regex pattern for ${VAR:-default} environment variable expansion
#[allow(clippy::expect_used)]
static ENV_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{(\w+):-([^}]*)\}").expect("constant regex pattern is valid"));

/// Errors from rendering a command template
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unknown placeholder {{{name}}} in {template:?}")]
    UnknownPlaceholder { name: String, template: String },
}

/// Render a shell command template.
///
/// `${VAR:-default}` is expanded from the environment first. Every `{name}`
/// must then be present in `vars`; substituted values are shell-quoted so
/// keys and paths with spaces survive `bash -c`.
pub fn render(template: &str, vars: &HashMap<&str, String>) -> Result<String, TemplateError> {
    let expanded = ENV_PATTERN
        .replace_all(template, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_else(|_| caps[2].to_string())
        })
        .to_string();

    if let Some(missing) = VAR_PATTERN
        .captures_iter(&expanded)
        .map(|caps| caps[1].to_string())
        .find(|name| !vars.contains_key(name.as_str()))
    {
        return Err(TemplateError::UnknownPlaceholder {
            name: missing,
            template: template.to_string(),
        });
    }

    Ok(VAR_PATTERN
        .replace_all(&expanded, |caps: &regex::Captures| {
            vars.get(&caps[1]).map(|v| shell_quote(v)).unwrap_or_default()
        })
        .to_string())
}

/// Quote a value for POSIX shells, leaving plain words untouched
pub fn shell_quote(value: &str) -> String {
    let plain = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=+@%,".contains(c));
    if plain {
        value.to_string()
    } else {
        format!("'{}'", value.replace('\'', r"'\''"))
    }
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
