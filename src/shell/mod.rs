//! Process execution and host detection.

pub mod command;
pub mod platform;

pub use command::{run_program, run_shell, CommandOutput};
pub use platform::{is_ci, is_ci_with, is_macos, shell_invocation};
