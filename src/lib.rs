//! mobile-doctor - checks that a machine can build and preview mobile apps.
//!
//! The core is a requirement checklist runner: a set of independent
//! asynchronous checks runs concurrently, results are aggregated in
//! completion order, and the caller decides whether an unmet requirement
//! is fatal.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`platform`] - Android, iOS and config-declared requirement groups
//! - [`requirements`] - Requirement types and the concurrent runner
//! - [`shell`] - External process execution
//! - [`ui`] - Reporters, theme and terminal output
//!
//! # Example
//!
//! ```
//! use mobile_doctor::requirements::{
//!     CommandRequirements, Requirement, RequirementList, RequirementProcessor,
//! };
//! use mobile_doctor::ui::ExecutionMode;
//!
//! let requirements = CommandRequirements::new().with(
//!     "tools",
//!     RequirementList::new(vec![
//!         Requirement::new("Node", || async { Ok(Some("v20.11.0".to_string())) }),
//!         Requirement::new("Watchman", || async { Err("not installed".to_string()) })
//!             .with_supplemental_message("brew install watchman"),
//!     ]),
//! );
//!
//! let runtime = tokio::runtime::Builder::new_current_thread()
//!     .enable_all()
//!     .build()
//!     .unwrap();
//! let result = runtime
//!     .block_on(RequirementProcessor::execute(requirements, ExecutionMode::Silent))
//!     .unwrap();
//!
//! assert!(!result.has_met_all_requirements);
//! assert_eq!(result.tests.len(), 2);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod platform;
pub mod requirements;
pub mod shell;
pub mod ui;

pub use error::{DoctorError, Result};
