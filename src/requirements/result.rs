//! Outcomes of running requirements.

use std::time::Duration;

use serde::{Serialize, Serializer};

/// The outcome of running one requirement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequirementResult {
    /// Title copied from the requirement.
    pub title: String,
    /// Whether the check passed.
    pub has_passed: bool,
    /// Outcome text plus supplemental text, trimmed.
    pub message: String,
    /// Wall-clock time the check took.
    #[serde(serialize_with = "serialize_secs")]
    pub duration: Duration,
}

/// Aggregate outcome of one processor run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequirementCheckResult {
    /// True iff every executed check passed. Vacuously true.
    pub has_met_all_requirements: bool,
    /// Per-check results in completion order.
    pub tests: Vec<RequirementResult>,
}

impl Default for RequirementCheckResult {
    fn default() -> Self {
        Self::new()
    }
}

impl RequirementCheckResult {
    /// An empty, passing aggregate.
    pub fn new() -> Self {
        Self {
            has_met_all_requirements: true,
            tests: Vec::new(),
        }
    }

    /// Append a settled check. A failure flips the aggregate for good.
    pub fn record(&mut self, result: RequirementResult) {
        if !result.has_passed {
            self.has_met_all_requirements = false;
        }
        self.tests.push(result);
    }

    /// Number of checks that passed.
    pub fn passed_count(&self) -> usize {
        self.tests.iter().filter(|t| t.has_passed).count()
    }

    /// Checks that failed, in completion order.
    pub fn failures(&self) -> impl Iterator<Item = &RequirementResult> {
        self.tests.iter().filter(|t| !t.has_passed)
    }
}

fn serialize_secs<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(title: &str, passed: bool) -> RequirementResult {
        RequirementResult {
            title: title.to_string(),
            has_passed: passed,
            message: String::new(),
            duration: Duration::from_millis(250),
        }
    }

    #[test]
    fn new_aggregate_is_vacuously_met() {
        let agg = RequirementCheckResult::new();
        assert!(agg.has_met_all_requirements);
        assert!(agg.tests.is_empty());
    }

    #[test]
    fn failure_flips_aggregate_permanently() {
        let mut agg = RequirementCheckResult::new();
        agg.record(result("a", true));
        assert!(agg.has_met_all_requirements);
        agg.record(result("b", false));
        agg.record(result("c", true));
        assert!(!agg.has_met_all_requirements);
        assert_eq!(agg.tests.len(), 3);
        assert_eq!(agg.passed_count(), 2);
        assert_eq!(
            agg.failures().map(|t| t.title.as_str()).collect::<Vec<_>>(),
            vec!["b"]
        );
    }

    #[test]
    fn serializes_duration_as_seconds() {
        let json = serde_json::to_value(result("adb", true)).unwrap();
        assert_eq!(json["title"], "adb");
        assert_eq!(json["has_passed"], true);
        assert_eq!(json["duration"], 0.25);
    }
}
