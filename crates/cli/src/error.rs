// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! Errors carry:
//! - What went wrong (message)
//! - Why it might have happened (context)
//! - How to fix it (suggestions)

use std::fmt;
use std::path::Path;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct NbError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Original error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl NbError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    /// Add context about why this error might have happened.
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    /// Add a suggestion for how to fix this error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Set the source error that caused this error.
    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.context.push(source.to_string());
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for NbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for NbError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Common error builders for typical failure scenarios.
impl NbError {
    /// No builder with this name in the inventory.
    pub fn builder_not_found(name: &str, known: &[&str]) -> Self {
        let err = NbError::new(format!("Builder '{}' not found", name));
        let err = if known.is_empty() {
            err.with_context("The configured inventory is empty")
        } else {
            err.with_context(format!("Known builders: {}", known.join(", ")))
        };
        err.with_suggestion("List configured builders: nb builders")
    }

    /// The configuration file could not be loaded.
    pub fn config_invalid<E: std::error::Error + Send + Sync + 'static>(
        path: Option<&Path>,
        source: E,
    ) -> Self {
        let location = path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "default location".to_string());
        NbError::new(format!("Failed to load configuration from {}", location))
            .with_source(source)
            .with_suggestion("Check the file against the documented sections")
            .with_suggestion("Run without --config to use the built-in defaults")
    }

    /// A spooled trigger names a scheduler this binary does not run.
    pub fn not_a_tester_trigger(scheduler: &str) -> Self {
        NbError::new(format!("Trigger for '{}' is not a tester trigger", scheduler))
            .with_context("Only 'Julia CI (<builder> testing)' triggers can be dispatched")
            .with_suggestion("Coverage and non-assert triggers are consumed by their own jobs")
    }

    /// A trigger or invocation lacks the artifact URL.
    pub fn missing_url(origin: &str) -> Self {
        NbError::new(format!("No artifact URL in {}", origin))
            .with_context("The tester needs the URL of an uploaded artifact")
            .with_suggestion("Pass one explicitly: nb test <builder> --url <url>")
    }

    /// Packaging needs something to check out.
    pub fn missing_revision() -> Self {
        NbError::new("Nothing to check out")
            .with_context("Neither --branch nor --revision was given")
            .with_suggestion("Package a branch: nb package <builder> --branch master")
    }

    /// The requested branch is filtered out.
    pub fn branch_filtered(project: &str, branch: &str) -> Self {
        NbError::new(format!("{} {} is not packaged", project, branch))
            .with_context("The change filter only accepts configured projects and branches")
            .with_suggestion("Check the filter: nb branch <branch>")
            .with_suggestion("Package anyway with --force")
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
