//! Live per-check display.

use std::time::Duration;

use anyhow::Context;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::requirements::{RequirementCheckResult, RequirementResult};

use super::headless::summary_line;
use super::progress::format_duration;
use super::reporter::RequirementReporter;
use super::theme::DoctorTheme;

const TICK_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";
const TICK_INTERVAL: Duration = Duration::from_millis(80);

/// Reporter that renders one spinner line per check under a running header.
///
/// Lines finish independently as their checks settle; a failed line never
/// affects its siblings.
pub struct InteractiveReporter {
    multi: MultiProgress,
    header: Option<ProgressBar>,
    lines: Vec<ProgressBar>,
    theme: DoctorTheme,
}

impl InteractiveReporter {
    /// Create a reporter drawing to stderr-backed terminal output.
    pub fn new(theme: DoctorTheme) -> Self {
        Self::with_multi(MultiProgress::new(), theme)
    }

    /// Create a reporter that draws nothing (for tests).
    pub fn hidden() -> Self {
        Self::with_multi(
            MultiProgress::with_draw_target(ProgressDrawTarget::hidden()),
            DoctorTheme::plain(),
        )
    }

    fn with_multi(multi: MultiProgress, theme: DoctorTheme) -> Self {
        Self {
            multi,
            header: None,
            lines: Vec::new(),
            theme,
        }
    }

    fn spinner(&self, template: &str, msg: String) -> anyhow::Result<ProgressBar> {
        let bar = self.multi.add(ProgressBar::new_spinner());
        bar.set_style(
            ProgressStyle::with_template(template)
                .context("invalid spinner template")?
                .tick_chars(TICK_CHARS),
        );
        bar.set_message(msg);
        bar.enable_steady_tick(TICK_INTERVAL);
        Ok(bar)
    }

    fn finished_line(&self, result: &RequirementResult) -> String {
        let label = format!(
            "{} ({})",
            result.title,
            format_duration(result.duration)
        );
        if result.has_passed {
            let mut line = self.theme.format_success(&label);
            if !result.message.is_empty() {
                line.push(' ');
                line.push_str(&self.theme.dim.apply_to(&result.message).to_string());
            }
            line
        } else {
            let mut line = self.theme.format_error(&label);
            for msg_line in result.message.lines() {
                line.push_str("\n    ");
                line.push_str(&self.theme.error.apply_to(msg_line).to_string());
            }
            line
        }
    }

    /// Messages currently shown on each check line (for tests).
    pub fn line_messages(&self) -> Vec<String> {
        self.lines.iter().map(|bar| bar.message()).collect()
    }
}

impl RequirementReporter for InteractiveReporter {
    fn start(&mut self, titles: &[String]) -> anyhow::Result<()> {
        let header = self.spinner(
            "{spinner:.magenta} {msg} {elapsed_precise:.dim}",
            format!("Checking {} requirements", titles.len()),
        )?;
        self.header = Some(header);
        for title in titles {
            let line = self.spinner("  {spinner:.magenta} {msg}", title.clone())?;
            self.lines.push(line);
        }
        Ok(())
    }

    fn check_finished(&mut self, index: usize, result: &RequirementResult) -> anyhow::Result<()> {
        let text = self.finished_line(result);
        let line = self
            .lines
            .get(index)
            .with_context(|| format!("no display line for check #{}", index))?;
        line.set_style(ProgressStyle::with_template("  {msg}").context("invalid line template")?);
        line.finish_with_message(text);
        Ok(())
    }

    fn finish(&mut self, summary: &RequirementCheckResult, elapsed: Duration) -> anyhow::Result<()> {
        let header = self
            .header
            .take()
            .context("report finished before it was started")?;
        let headline = summary_line(summary, elapsed);
        let text = if summary.has_met_all_requirements {
            self.theme.format_success(&headline)
        } else {
            self.theme.format_error(&headline)
        };
        header.set_style(ProgressStyle::with_template("{msg}").context("invalid header template")?);
        header.finish_with_message(text);
        Ok(())
    }
}
