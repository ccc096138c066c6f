//! Reporting seam between the requirement processor and the display.
//!
//! The processor drives a [`RequirementReporter`] while checks settle:
//!
//! - [`InteractiveReporter`](super::InteractiveReporter) renders a live
//!   per-check display
//! - [`HeadlessReporter`](super::HeadlessReporter) prints a summary once
//!   every check has settled
//! - [`SilentReporter`] renders nothing (the caller prints the result)
//! - [`RecordingReporter`] captures calls for tests

use std::time::Duration;

use anyhow::bail;

use crate::requirements::{RequirementCheckResult, RequirementResult};

use super::{DoctorTheme, HeadlessReporter, InteractiveReporter};

/// How the processor presents its progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// Live per-check display on the terminal.
    #[default]
    Interactive,
    /// No live display; a textual summary after all checks settle.
    Headless,
    /// No output at all.
    Silent,
}

/// Receives progress from a processor run.
///
/// Every method may fail; the processor turns a failure into
/// [`DoctorError::Unexpected`](crate::DoctorError::Unexpected).
pub trait RequirementReporter {
    /// Called once with the titles of every check about to run.
    fn start(&mut self, titles: &[String]) -> anyhow::Result<()>;

    /// Called when the check at `index` (position in `titles`) settles.
    fn check_finished(&mut self, index: usize, result: &RequirementResult) -> anyhow::Result<()>;

    /// Called once after every check has settled.
    fn finish(&mut self, summary: &RequirementCheckResult, elapsed: Duration)
        -> anyhow::Result<()>;
}

/// Create the reporter for a mode, writing to stdout.
pub fn create_reporter(mode: ExecutionMode) -> Box<dyn RequirementReporter> {
    let theme = DoctorTheme::for_stdout();
    match mode {
        ExecutionMode::Interactive => Box::new(InteractiveReporter::new(theme)),
        ExecutionMode::Headless => Box::new(HeadlessReporter::new(std::io::stdout(), theme)),
        ExecutionMode::Silent => Box::new(SilentReporter),
    }
}

/// Reporter that renders nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl RequirementReporter for SilentReporter {
    fn start(&mut self, _titles: &[String]) -> anyhow::Result<()> {
        Ok(())
    }

    fn check_finished(&mut self, _index: usize, _result: &RequirementResult) -> anyhow::Result<()> {
        Ok(())
    }

    fn finish(
        &mut self,
        _summary: &RequirementCheckResult,
        _elapsed: Duration,
    ) -> anyhow::Result<()> {
        Ok(())
    }
}

/// A call received by [`RecordingReporter`].
#[derive(Debug, Clone, PartialEq)]
pub enum ReporterEvent {
    Started(Vec<String>),
    Finished { index: usize, title: String },
    Summary { passed: usize, total: usize },
}

/// Reporter that records every call, optionally failing on one of them.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: Vec<ReporterEvent>,
    fail_after: Option<(usize, String)>,
}

impl RecordingReporter {
    /// Create a reporter that accepts every call.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reporter whose call number `calls` (zero-based) fails.
    pub fn failing_at(calls: usize, message: &str) -> Self {
        Self {
            events: Vec::new(),
            fail_after: Some((calls, message.to_string())),
        }
    }

    /// Calls received so far, in order.
    pub fn events(&self) -> &[ReporterEvent] {
        &self.events
    }

    fn push(&mut self, event: ReporterEvent) -> anyhow::Result<()> {
        if let Some((at, message)) = &self.fail_after {
            if self.events.len() == *at {
                bail!("{}", message);
            }
        }
        self.events.push(event);
        Ok(())
    }
}

impl RequirementReporter for RecordingReporter {
    fn start(&mut self, titles: &[String]) -> anyhow::Result<()> {
        self.push(ReporterEvent::Started(titles.to_vec()))
    }

    fn check_finished(&mut self, index: usize, result: &RequirementResult) -> anyhow::Result<()> {
        self.push(ReporterEvent::Finished {
            index,
            title: result.title.clone(),
        })
    }

    fn finish(&mut self, summary: &RequirementCheckResult, _elapsed: Duration) -> anyhow::Result<()> {
        self.push(ReporterEvent::Summary {
            passed: summary.passed_count(),
            total: summary.tests.len(),
        })
    }
}
