//! External process execution for checks.
//!
//! Commands run on the tokio reactor so a slow tool suspends only its own
//! check. Each run is bounded by the context's command timeout and the
//! child is killed if the limit is hit.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::process::Command;
use tracing::debug;

use super::platform::shell_invocation;
use crate::error::{DoctorError, Result};
use crate::requirements::CheckContext;

/// Captured output of a finished process.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,
}

impl CommandOutput {
    /// Whether the process exited with code 0.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// First non-empty line of stdout, falling back to stderr.
    ///
    /// Several JDK and Android tools print their version on stderr.
    pub fn first_line(&self) -> Option<&str> {
        first_non_empty(&self.stdout).or_else(|| first_non_empty(&self.stderr))
    }

    /// Short description of a failed run.
    pub fn failure_summary(&self) -> String {
        let code = self
            .exit_code
            .map(|c| format!("exited with code {}", c))
            .unwrap_or_else(|| "was terminated by a signal".to_string());
        match first_non_empty(&self.stderr).or_else(|| first_non_empty(&self.stdout)) {
            Some(line) => format!("{}: {}", code, line),
            None => code,
        }
    }
}

fn first_non_empty(text: &str) -> Option<&str> {
    text.lines().map(str::trim).find(|l| !l.is_empty())
}

/// Run `program` with `args`, resolving it on the context's PATH.
pub async fn run_program(
    program: &str,
    args: &[&str],
    ctx: &CheckContext,
) -> Result<CommandOutput> {
    let cmd_line = display_command(program, args);
    let executable = resolve_program(program, ctx).ok_or_else(|| DoctorError::CommandFailed {
        command: cmd_line.clone(),
        message: format!("'{}' was not found on PATH", program),
    })?;

    let mut cmd = Command::new(executable);
    cmd.args(args);
    run(cmd, cmd_line, ctx).await
}

/// Run a command string through the platform shell.
pub async fn run_shell(command: &str, ctx: &CheckContext) -> Result<CommandOutput> {
    let (shell, flag) = shell_invocation();
    let executable = ctx
        .resolve_tool(shell)
        .unwrap_or_else(|| PathBuf::from(shell));

    let mut cmd = Command::new(executable);
    cmd.arg(flag).arg(command);
    run(cmd, command.to_string(), ctx).await
}

fn resolve_program(program: &str, ctx: &CheckContext) -> Option<PathBuf> {
    let path = Path::new(program);
    if path.components().count() > 1 {
        let path = ctx.resolve_path(path);
        return path.is_file().then_some(path);
    }
    ctx.resolve_tool(program)
}

fn display_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

async fn run(mut cmd: Command, cmd_line: String, ctx: &CheckContext) -> Result<CommandOutput> {
    cmd.env("PATH", ctx.joined_path())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    if ctx.project_root().is_dir() {
        cmd.current_dir(ctx.project_root());
    }

    let limit = ctx.command_timeout();
    let start = Instant::now();
    debug!("Running '{}'", cmd_line);

    let output = match tokio::time::timeout(limit, cmd.output()).await {
        Ok(result) => result.map_err(|e| DoctorError::CommandFailed {
            command: cmd_line.clone(),
            message: e.to_string(),
        })?,
        Err(_) => {
            return Err(DoctorError::CommandTimedOut {
                command: cmd_line,
                secs: limit.as_secs(),
            })
        }
    };

    let duration = start.elapsed();
    debug!(
        code = ?output.status.code(),
        "'{}' finished in {:.3}s",
        cmd_line,
        duration.as_secs_f64()
    );

    Ok(CommandOutput {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        duration,
    })
}
