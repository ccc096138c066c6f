//! The requirement checklist runner.
//!
//! [`RequirementProcessor`] flattens the enabled groups of a
//! [`CommandRequirements`], runs every check concurrently on the current
//! task, and aggregates results in completion order. Individual check
//! failures are data; the only error it raises is a reporter failure.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::time::Instant;

use futures::stream::{FuturesUnordered, StreamExt};
use futures::FutureExt;
use tracing::debug;

use crate::error::{DoctorError, Result};
use crate::ui::{create_reporter, ExecutionMode, RequirementReporter};

use super::requirement::{CommandRequirements, Requirement};
use super::result::{RequirementCheckResult, RequirementResult};

/// Runs requirement checks and reports their progress.
pub struct RequirementProcessor;

impl RequirementProcessor {
    /// Run every enabled requirement, reporting to stdout in `mode`.
    pub async fn execute(
        requirements: CommandRequirements,
        mode: ExecutionMode,
    ) -> Result<RequirementCheckResult> {
        if requirements.enabled_count() == 0 {
            debug!("No enabled requirements; nothing to check");
            return Ok(RequirementCheckResult::new());
        }
        let mut reporter = create_reporter(mode);
        Self::execute_with_reporter(requirements, reporter.as_mut()).await
    }

    /// Run every enabled requirement, reporting to `reporter`.
    pub async fn execute_with_reporter(
        requirements: CommandRequirements,
        reporter: &mut dyn RequirementReporter,
    ) -> Result<RequirementCheckResult> {
        let checks = requirements.into_enabled_requirements();
        let mut aggregate = RequirementCheckResult::new();
        if checks.is_empty() {
            debug!("No enabled requirements; nothing to check");
            return Ok(aggregate);
        }

        let titles: Vec<String> = checks.iter().map(|r| r.title.clone()).collect();
        debug!("Checking {} requirements", titles.len());
        let started = Instant::now();
        reporter.start(&titles).map_err(unexpected)?;

        let mut pending: FuturesUnordered<_> = checks
            .into_iter()
            .enumerate()
            .map(|(index, requirement)| async move { (index, run_requirement(requirement).await) })
            .collect();

        while let Some((index, result)) = pending.next().await {
            reporter.check_finished(index, &result).map_err(unexpected)?;
            aggregate.record(result);
        }

        let elapsed = started.elapsed();
        debug!(
            passed = aggregate.passed_count(),
            total = aggregate.tests.len(),
            "Requirement checks finished in {:.3}s",
            elapsed.as_secs_f64()
        );
        reporter.finish(&aggregate, elapsed).map_err(unexpected)?;
        Ok(aggregate)
    }
}

/// Run one requirement and normalize its outcome.
///
/// Never fails: a failing (or panicking) check becomes a result with
/// `has_passed == false`.
pub async fn run_requirement(requirement: Requirement) -> RequirementResult {
    let (check, text) = requirement.into_parts();

    let start = Instant::now();
    let outcome = AssertUnwindSafe(check()).catch_unwind().await;
    let duration = start.elapsed();

    let (has_passed, detail) = match outcome {
        Ok(Ok(detail)) => (true, detail.or(text.fulfilled)),
        Ok(Err(err)) => (false, Some(err).filter(|e| !e.is_empty()).or(text.unfulfilled)),
        Err(panic) => (false, Some(format!("check panicked: {}", panic_message(&*panic)))),
    };
    let message = compose_message(detail.as_deref(), text.supplemental.as_deref());

    debug!(
        title = %text.title,
        passed = has_passed,
        "Check settled in {:.3}s",
        duration.as_secs_f64()
    );

    RequirementResult {
        title: text.title,
        has_passed,
        message,
        duration,
    }
}

/// Join outcome text and supplemental text with one space, trimmed.
pub fn compose_message(detail: Option<&str>, supplemental: Option<&str>) -> String {
    format!("{} {}", detail.unwrap_or(""), supplemental.unwrap_or(""))
        .trim()
        .to_string()
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

fn unexpected(err: anyhow::Error) -> DoctorError {
    DoctorError::Unexpected {
        message: format!("{:#}", err),
    }
}
