// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Child process shell adapter

use super::{ShellAdapter, ShellCommand, ShellError, ShellOutput};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::{Child, Command};
use tokio::time::Instant;

/// Bytes of each stream kept for the returned output
const OUTPUT_TAIL_BYTES: usize = 64 * 1024;

/// Runs commands as local child processes.
///
/// stdout and stderr are streamed line by line; every line resets the
/// silence timer. Lines are decoded lossily, so compiler and test output in
/// any encoding never fails a command. Only the last [`OUTPUT_TAIL_BYTES`]
/// of each stream are returned.
///
/// Each command runs in its own process group. A run that is abandoned
/// (its future dropped, e.g. on Ctrl-C) kills the whole group.
#[derive(Clone, Default)]
pub struct ProcessAdapter;

impl ProcessAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ShellAdapter for ProcessAdapter {
    async fn run(&self, cmd: &ShellCommand) -> Result<ShellOutput, ShellError> {
        let (program, args) = cmd.argv.split_first().ok_or_else(|| ShellError::SpawnFailed {
            program: String::new(),
            reason: "empty command".to_string(),
        })?;

        let mut command = Command::new(program);
        command
            .args(args)
            .current_dir(&cmd.cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        #[cfg(unix)]
        command.process_group(0);

        for (key, value) in &cmd.env {
            match value {
                Some(value) => command.env(key, value),
                None => command.env_remove(key),
            };
        }

        let mut child = command.spawn().map_err(|e| ShellError::SpawnFailed {
            program: program.clone(),
            reason: e.to_string(),
        })?;
        let mut group = GroupGuard::new(&child);

        let result = supervise(&mut child, cmd).await;
        if result.is_err() {
            terminate(&mut child, cmd.timeouts.grace).await;
        }
        group.disarm();
        result
    }
}

/// Stream output until both pipes close, then wait for the exit status
async fn supervise(child: &mut Child, cmd: &ShellCommand) -> Result<ShellOutput, ShellError> {
    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| ShellError::Io("stdout not captured".to_string()))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| ShellError::Io("stderr not captured".to_string()))?;
    let mut out_lines = LossyLines::new(stdout);
    let mut err_lines = LossyLines::new(stderr);

    let timeouts = cmd.timeouts;
    let deadline = timeouts.max_time.map(|max| Instant::now() + max);
    let mut last_output = Instant::now();
    let mut out_buf = Tail::new(OUTPUT_TAIL_BYTES);
    let mut err_buf = Tail::new(OUTPUT_TAIL_BYTES);
    let mut out_open = true;
    let mut err_open = true;

    while out_open || err_open {
        let silence_at = timeouts.silence.map(|s| last_output + s);
        let wake = earliest(silence_at, deadline);

        tokio::select! {
            line = out_lines.next_line(), if out_open => match line? {
                Some(line) => {
                    tracing::debug!(target: "nb::output", "{}", line);
                    out_buf.push(line);
                    last_output = Instant::now();
                }
                None => out_open = false,
            },
            line = err_lines.next_line(), if err_open => match line? {
                Some(line) => {
                    tracing::debug!(target: "nb::output", "{}", line);
                    err_buf.push(line);
                    last_output = Instant::now();
                }
                None => err_open = false,
            },
            _ = sleep_until(wake) => {
                return Err(match (deadline, timeouts.max_time) {
                    (Some(at), Some(max)) if Instant::now() >= at => ShellError::TimedOut(max),
                    _ => ShellError::Silent(timeouts.silence.unwrap_or_default()),
                });
            }
        }
    }

    // Streams closed; the process may still linger until the deadline
    let status = match (deadline, timeouts.max_time) {
        (Some(at), Some(max)) => tokio::time::timeout_at(at, child.wait())
            .await
            .map_err(|_| ShellError::TimedOut(max))?,
        _ => child.wait().await,
    }
    .map_err(|e| ShellError::Io(e.to_string()))?;

    Ok(ShellOutput {
        exit_code: status.code(),
        stdout: out_buf.into_string(),
        stderr: err_buf.into_string(),
    })
}

/// Newline-delimited reader that never rejects a byte sequence.
///
/// Partial lines stay in `buf` across calls, so `next_line` can be raced in
/// `select!` without losing output.
struct LossyLines<R> {
    reader: BufReader<R>,
    buf: Vec<u8>,
}

impl<R: AsyncRead + Unpin> LossyLines<R> {
    fn new(inner: R) -> Self {
        Self {
            reader: BufReader::new(inner),
            buf: Vec::new(),
        }
    }

    async fn next_line(&mut self) -> Result<Option<String>, ShellError> {
        let read = self
            .reader
            .read_until(b'\n', &mut self.buf)
            .await
            .map_err(|e| ShellError::Io(e.to_string()))?;
        if read == 0 && self.buf.is_empty() {
            return Ok(None);
        }

        let mut line = std::mem::take(&mut self.buf);
        if line.last() == Some(&b'\n') {
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&line).into_owned()))
    }
}

/// The most recent lines of a stream, bounded in bytes
struct Tail {
    lines: VecDeque<String>,
    bytes: usize,
    limit: usize,
}

impl Tail {
    fn new(limit: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            bytes: 0,
            limit,
        }
    }

    fn push(&mut self, line: String) {
        self.bytes += line.len() + 1;
        self.lines.push_back(line);
        while self.bytes > self.limit && self.lines.len() > 1 {
            if let Some(dropped) = self.lines.pop_front() {
                self.bytes -= dropped.len() + 1;
            }
        }
    }

    fn into_string(self) -> String {
        let mut out = String::with_capacity(self.bytes);
        for line in self.lines {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

/// Kills the child's process group if the run is dropped before it finishes.
///
/// `kill_on_drop` only reaches the direct child; everything it spawned
/// shares the group.
struct GroupGuard {
    pid: Option<u32>,
}

impl GroupGuard {
    fn new(child: &Child) -> Self {
        Self { pid: child.id() }
    }

    fn disarm(&mut self) {
        self.pid = None;
    }
}

impl Drop for GroupGuard {
    fn drop(&mut self) {
        #[cfg(unix)]
        if let Some(pid) = self.pid.take() {
            use nix::sys::signal::{killpg, Signal};
            use nix::unistd::Pid;

            tracing::warn!(pid, "run abandoned, killing process group");
            let _ = killpg(Pid::from_raw(pid as i32), Signal::SIGKILL);
        }
    }
}

fn earliest(a: Option<Instant>, b: Option<Instant>) -> Option<Instant> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

async fn sleep_until(at: Option<Instant>) {
    match at {
        Some(at) => tokio::time::sleep_until(at).await,
        None => std::future::pending().await,
    }
}

/// SIGTERM the process group, then SIGKILL after `grace`
async fn terminate(child: &mut Child, grace: Duration) {
    #[cfg(unix)]
    if let Some(pid) = child.id() {
        use nix::sys::signal::{killpg, Signal};
        use nix::unistd::Pid;

        let group = Pid::from_raw(pid as i32);
        tracing::warn!(pid, "sending SIGTERM");
        let _ = killpg(group, Signal::SIGTERM);
        if tokio::time::timeout(grace, child.wait()).await.is_ok() {
            return;
        }
        tracing::warn!(pid, "grace expired, sending SIGKILL");
        let _ = killpg(group, Signal::SIGKILL);
    }
    #[cfg(not(unix))]
    let _ = grace;

    let _ = child.kill().await;
}

#[cfg(all(test, unix))]
#[path = "process_tests.rs"]
mod tests;
