//! Constructors for common checks.
//!
//! Each constructor snapshots what it needs from a [`CheckContext`] and
//! returns a [`Requirement`] whose check runs later, inside the processor.

use std::path::PathBuf;

use super::context::CheckContext;
use super::requirement::{CheckOutcome, Requirement};
use crate::shell::{run_program, run_shell, CommandOutput};

/// Passes when `tool` resolves on the context's PATH.
pub fn tool_on_path(title: impl Into<String>, tool: &str, ctx: &CheckContext) -> Requirement {
    let tool = tool.to_string();
    let ctx = ctx.clone();
    Requirement::new(title, move || async move {
        match ctx.resolve_tool(&tool) {
            Some(path) => Ok(Some(format!("Found at {}", path.display()))),
            None => Err(format!("'{}' was not found on PATH", tool)),
        }
    })
}

/// Passes when `program args...` exits with code 0.
///
/// Reports the first line the program printed.
pub fn command_succeeds(
    title: impl Into<String>,
    program: &str,
    args: &[&str],
    ctx: &CheckContext,
) -> Requirement {
    let program = program.to_string();
    let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
    let ctx = ctx.clone();
    Requirement::new(title, move || async move {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        let output = run_program(&program, &args, &ctx)
            .await
            .map_err(|e| e.to_string())?;
        settle(&output)
    })
}

/// Passes when a shell command string exits with code 0.
pub fn shell_succeeds(
    title: impl Into<String>,
    command: &str,
    ctx: &CheckContext,
) -> Requirement {
    let command = command.to_string();
    let ctx = ctx.clone();
    Requirement::new(title, move || async move {
        let output = run_shell(&command, &ctx).await.map_err(|e| e.to_string())?;
        settle(&output)
    })
}

/// Passes when `path` exists, relative to the project root.
pub fn file_exists(title: impl Into<String>, path: &str, ctx: &CheckContext) -> Requirement {
    let display = path.to_string();
    let resolved = ctx.resolve_path(path);
    Requirement::new(title, move || async move {
        if resolved.exists() {
            Ok(Some(format!("Found {}", display)))
        } else {
            Err(format!("{} does not exist", resolved.display()))
        }
    })
}

/// Passes when environment variable `var` names an existing directory.
pub fn env_dir(title: impl Into<String>, var: &str, ctx: &CheckContext) -> Requirement {
    let var = var.to_string();
    let value = ctx.var(&var).map(PathBuf::from);
    Requirement::new(title, move || async move {
        match value {
            Some(dir) if dir.is_dir() => Ok(Some(format!("{}={}", var, dir.display()))),
            Some(dir) => Err(format!(
                "{} points to {}, which is not a directory",
                var,
                dir.display()
            )),
            None => Err(format!("{} is not set", var)),
        }
    })
}

fn settle(output: &CommandOutput) -> CheckOutcome {
    if output.success() {
        Ok(output.first_line().map(str::to_string))
    } else {
        Err(output.failure_summary())
    }
}
