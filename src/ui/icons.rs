//! Status vocabulary shared by every report.

use super::theme::DoctorTheme;

/// Canonical status kinds used across mobile-doctor output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Check passed.
    Passed,
    /// Check failed.
    Failed,
    /// Check has not settled yet.
    Running,
    /// Check belongs to a disabled group.
    Disabled,
}

impl StatusKind {
    /// Status for a settled check.
    pub fn from_passed(has_passed: bool) -> Self {
        if has_passed {
            Self::Passed
        } else {
            Self::Failed
        }
    }

    /// Unicode icon.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Passed => "✓",
            Self::Failed => "✗",
            Self::Running => "◆",
            Self::Disabled => "○",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &DoctorTheme) -> String {
        let icon = self.icon();
        match self {
            Self::Passed => theme.success.apply_to(icon).to_string(),
            Self::Failed => theme.error.apply_to(icon).to_string(),
            Self::Running => theme.info.apply_to(icon).to_string(),
            Self::Disabled => theme.dim.apply_to(icon).to_string(),
        }
    }

    /// Format a status line: styled icon + message.
    pub fn format(self, theme: &DoctorTheme, msg: &str) -> String {
        format!("{} {}", self.styled(theme), msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_returns_unicode_symbols() {
        assert_eq!(StatusKind::Passed.icon(), "✓");
        assert_eq!(StatusKind::Failed.icon(), "✗");
        assert_eq!(StatusKind::Running.icon(), "◆");
        assert_eq!(StatusKind::Disabled.icon(), "○");
    }

    #[test]
    fn from_passed_maps_bool() {
        assert_eq!(StatusKind::from_passed(true), StatusKind::Passed);
        assert_eq!(StatusKind::from_passed(false), StatusKind::Failed);
    }

    #[test]
    fn format_plain_prefixes_icon() {
        let theme = DoctorTheme::plain();
        assert_eq!(StatusKind::Failed.format(&theme, "adb"), "✗ adb");
    }
}
