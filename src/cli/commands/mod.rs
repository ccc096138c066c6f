//! Command implementations.
//!
//! Each subcommand has a struct implementing [`Command`].

pub mod check;
pub mod dispatcher;
pub mod list;

pub use check::{CheckCommand, JsonReport};
pub use dispatcher::{Command, CommandDispatcher, CommandResult, EXIT_CONFIG, EXIT_UNMET};
pub use list::ListCommand;
