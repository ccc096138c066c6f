//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for plain messages, with [`TerminalUI`],
//!   [`NonInteractiveUI`] and [`MockUI`] implementations
//! - [`RequirementReporter`] trait for requirement progress, with
//!   [`InteractiveReporter`] and [`HeadlessReporter`] implementations
//! - Theme, status icons and duration formatting
//!
//! # Example
//!
//! ```
//! use mobile_doctor::ui::{create_ui, UserInterface};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false);
//! ui.show_header("Android");
//! ui.success("Ready to go!");
//! ```

pub mod headless;
pub mod icons;
pub mod interactive;
pub mod mock;
pub mod non_interactive;
pub mod progress;
pub mod reporter;
pub mod terminal;
pub mod theme;

pub use headless::HeadlessReporter;
pub use icons::StatusKind;
pub use interactive::InteractiveReporter;
pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use progress::format_duration;
pub use reporter::{
    create_reporter, ExecutionMode, RecordingReporter, ReporterEvent, RequirementReporter,
    SilentReporter,
};
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, DoctorTheme};

/// Trait for user-facing messages.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}
