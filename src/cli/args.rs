//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::platform::PlatformSelection;

/// mobile-doctor - check that this machine can build and preview mobile apps.
#[derive(Debug, Parser)]
#[command(name = "mobile-doctor")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides .mobile-doctor/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run requirement checks (default if no command specified)
    Check(CheckArgs),

    /// List requirement groups without running them
    List(ListArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, Args)]
pub struct CheckArgs {
    /// Platform groups to check
    #[arg(long, value_enum, default_value_t = PlatformSelection::All)]
    pub platform: PlatformSelection,

    /// Print a summary after all checks finish instead of a live display
    #[arg(long)]
    pub headless: bool,

    /// Print results as JSON (implies no live display)
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Platform groups to list as enabled
    #[arg(long, value_enum, default_value_t = PlatformSelection::All)]
    pub platform: PlatformSelection,
}
