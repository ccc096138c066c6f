//! Summary report for CI/headless environments.

use std::io::Write;
use std::time::Duration;

use crate::requirements::{RequirementCheckResult, RequirementResult};

use super::icons::StatusKind;
use super::progress::format_duration;
use super::reporter::RequirementReporter;
use super::theme::DoctorTheme;

/// Reporter that stays quiet while checks run, then prints a summary.
///
/// The summary is one line with the total time and pass count, followed by
/// one line per check. Failing checks also get their message.
pub struct HeadlessReporter<W: Write> {
    out: W,
    theme: DoctorTheme,
}

impl<W: Write> HeadlessReporter<W> {
    /// Create a reporter writing to `out`.
    pub fn new(out: W, theme: DoctorTheme) -> Self {
        Self { out, theme }
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_check(&mut self, result: &RequirementResult) -> std::io::Result<()> {
        let kind = StatusKind::from_passed(result.has_passed);
        writeln!(
            self.out,
            "  {} {} {}",
            kind.styled(&self.theme),
            result.title,
            self.theme
                .duration
                .apply_to(format!("({})", format_duration(result.duration))),
        )?;
        if !result.has_passed && !result.message.is_empty() {
            for line in result.message.lines() {
                writeln!(self.out, "      {}", self.theme.error.apply_to(line))?;
            }
        }
        Ok(())
    }
}

/// The summary line: total time and pass count.
pub fn summary_line(summary: &RequirementCheckResult, elapsed: Duration) -> String {
    let total = summary.tests.len();
    let label = if total == 1 {
        "requirement"
    } else {
        "requirements"
    };
    format!(
        "Checked {} {} in {}: {} of {} passed",
        total,
        label,
        format_duration(elapsed),
        summary.passed_count(),
        total
    )
}

impl<W: Write> RequirementReporter for HeadlessReporter<W> {
    fn start(&mut self, _titles: &[String]) -> anyhow::Result<()> {
        Ok(())
    }

    fn check_finished(&mut self, _index: usize, _result: &RequirementResult) -> anyhow::Result<()> {
        Ok(())
    }

    fn finish(&mut self, summary: &RequirementCheckResult, elapsed: Duration) -> anyhow::Result<()> {
        let headline = summary_line(summary, elapsed);
        let styled = if summary.has_met_all_requirements {
            self.theme.success.apply_to(headline)
        } else {
            self.theme.error.apply_to(headline)
        };
        writeln!(self.out, "{}", styled)?;
        for result in &summary.tests {
            self.write_check(result)?;
        }
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(title: &str, passed: bool, message: &str) -> RequirementResult {
        RequirementResult {
            title: title.to_string(),
            has_passed: passed,
            message: message.to_string(),
            duration: Duration::from_millis(12),
        }
    }

    fn render(summary: &RequirementCheckResult) -> String {
        let mut reporter = HeadlessReporter::new(Vec::new(), DoctorTheme::plain());
        reporter.start(&[]).unwrap();
        reporter
            .finish(summary, Duration::from_millis(1500))
            .unwrap();
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn summary_line_counts_passes() {
        let mut summary = RequirementCheckResult::new();
        summary.record(result("adb", true, ""));
        summary.record(result("Java", false, "not found"));
        assert_eq!(
            summary_line(&summary, Duration::from_millis(1500)),
            "Checked 2 requirements in 1.500s: 1 of 2 passed"
        );
    }

    #[test]
    fn summary_line_singular() {
        let mut summary = RequirementCheckResult::new();
        summary.record(result("adb", true, ""));
        assert!(summary_line(&summary, Duration::ZERO).starts_with("Checked 1 requirement in"));
    }

    #[test]
    fn lists_every_check_with_duration() {
        let mut summary = RequirementCheckResult::new();
        summary.record(result("adb", true, "adb 34.0.5"));
        summary.record(result("Java", false, "java was not found on PATH"));

        let out = render(&summary);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "Checked 2 requirements in 1.500s: 1 of 2 passed");
        assert_eq!(lines[1], "  ✓ adb (0.012s)");
        assert_eq!(lines[2], "  ✗ Java (0.012s)");
        assert_eq!(lines[3], "      java was not found on PATH");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn passing_messages_are_not_printed() {
        let mut summary = RequirementCheckResult::new();
        summary.record(result("adb", true, "adb 34.0.5"));
        assert!(!render(&summary).contains("34.0.5"));
    }

    #[test]
    fn multiline_failure_messages_are_indented() {
        let mut summary = RequirementCheckResult::new();
        summary.record(result("SDK", false, "first\nsecond"));
        let out = render(&summary);
        assert!(out.contains("      first\n      second\n"));
    }
}
