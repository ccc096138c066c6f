//! Non-interactive UI for CI/headless environments.

use super::UserInterface;

/// UI implementation for non-interactive mode.
///
/// Writes unstyled text; errors and warnings go to stderr.
#[derive(Debug, Default)]
pub struct NonInteractiveUI;

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new() -> Self {
        Self
    }
}

impl UserInterface for NonInteractiveUI {
    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("⚠ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn show_header(&mut self, title: &str) {
        println!("\n{}\n", title);
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_interactive_is_not_interactive() {
        let ui = NonInteractiveUI::new();
        assert!(!ui.is_interactive());
    }

    #[test]
    fn messages_do_not_panic() {
        let mut ui = NonInteractiveUI::new();
        ui.message("plain");
        ui.success("done");
        ui.warning("careful");
        ui.error("failed");
        ui.show_header("Header");
    }
}
