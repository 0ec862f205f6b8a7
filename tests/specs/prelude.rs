//! Shared helpers for the CLI specs

#![allow(dead_code)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use std::process::Output;
use tempfile::TempDir;

/// A scratch directory holding the config and every path a run writes to
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// A project whose config keeps workspaces, staging and spool inside it
    pub fn configured() -> Self {
        let project = Self::empty();
        project.config("");
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    pub fn file(&self, rel: &str, content: &str) {
        let path = self.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    /// Write `nb.toml` with project-local paths followed by `extra`
    pub fn config(&self, extra: &str) {
        let content = format!(
            "[source]\nworkdir = {:?}\n\n[storage]\nstaging_dir = {:?}\n\n[triggers]\nspool_dir = {:?}\n\n{}",
            self.join("build").display().to_string(),
            self.join("staging").display().to_string(),
            self.join("triggers").display().to_string(),
            extra
        );
        self.file("nb.toml", &content);
    }

    /// `nb` running in the project, with its config if there is one
    pub fn nb(&self) -> Nb {
        let mut cmd = Command::cargo_bin("nb").unwrap();
        cmd.current_dir(self.path())
            .env("RUST_LOG", "info")
            .env("NO_COLOR", "1")
            .env("XDG_CONFIG_HOME", self.path());
        let config = self.join("nb.toml");
        if config.exists() {
            cmd.arg("--config").arg(config);
        }
        Nb { cmd }
    }
}

pub struct Nb {
    cmd: Command,
}

impl Nb {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn passes(self) -> RunAssert {
        self.exits(0)
    }

    /// A run that finished and reported failure
    pub fn run_fails(self) -> RunAssert {
        self.exits(1)
    }

    /// A command that could not run at all
    pub fn errors(self) -> RunAssert {
        self.exits(2)
    }

    pub fn exits(mut self, code: i32) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert { output };
        assert_eq!(
            run.output.status.code(),
            Some(code),
            "unexpected exit status\nstdout:\n{}\nstderr:\n{}",
            run.stdout(),
            run.stderr()
        );
        run
    }
}

pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn stdout_has(self, expected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            predicate::str::contains(expected).eval(&stdout),
            "stdout does not contain {:?}:\n{}",
            expected,
            stdout
        );
        self
    }

    pub fn stdout_lacks(self, unexpected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            !stdout.contains(unexpected),
            "stdout contains {:?}:\n{}",
            unexpected,
            stdout
        );
        self
    }

    pub fn stderr_has(self, expected: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            predicate::str::contains(expected).eval(&stderr),
            "stderr does not contain {:?}:\n{}",
            expected,
            stderr
        );
        self
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.output.stdout).unwrap()
    }
}

/// An address nothing listens on
pub const DEAD_URL: &str = "http://127.0.0.1:9/julialangnightlies/pretesting/bin/linux/x64/1.7/julia-abc1234567-linux64.tar.gz";
