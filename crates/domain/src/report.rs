//! Step outcomes and scenario reports
//!
//! Field checks are collected softly: every step runs and is recorded,
//! and the report is judged at the end of the scenario.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::checks::CheckFailure;

/// How a single recorded step ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepStatus {
    /// The check passed.
    Passed,
    /// The check failed.
    Failed {
        /// The failure that was observed.
        failure: CheckFailure,
    },
}

/// One named, independently recorded verification step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepOutcome {
    /// Step name as shown in the report.
    pub name: String,
    /// How the step ended.
    pub status: StepStatus,
}

impl StepOutcome {
    /// Creates a passed outcome.
    #[must_use]
    pub fn passed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: StepStatus::Passed,
        }
    }

    /// Creates a failed outcome.
    #[must_use]
    pub fn failed(name: impl Into<String>, failure: CheckFailure) -> Self {
        Self {
            name: name.into(),
            status: StepStatus::Failed { failure },
        }
    }

    /// Returns true if the step passed.
    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self.status, StepStatus::Passed)
    }
}

/// The collected outcome of one scenario's field-assertion phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioReport {
    /// Unique identifier of this run.
    pub id: Uuid,
    /// Scenario name.
    pub scenario: String,
    /// When the assertion phase started.
    pub started_at: DateTime<Utc>,
    /// How long the assertion phase took.
    pub duration_ms: u64,
    /// Every recorded step, in execution order.
    pub steps: Vec<StepOutcome>,
    /// Total number of steps.
    pub total: usize,
    /// Number of passed steps.
    pub passed: usize,
    /// Number of failed steps.
    pub failed: usize,
}

impl ScenarioReport {
    /// Creates a report from recorded steps, computing the tallies.
    #[must_use]
    pub fn new(
        scenario: impl Into<String>,
        started_at: DateTime<Utc>,
        steps: Vec<StepOutcome>,
        duration_ms: u64,
    ) -> Self {
        let total = steps.len();
        let passed = steps.iter().filter(|s| s.is_passed()).count();
        let failed = total - passed;

        Self {
            id: Uuid::now_v7(),
            scenario: scenario.into(),
            started_at,
            duration_ms,
            steps,
            total,
            passed,
            failed,
        }
    }

    /// Returns true if every step passed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Returns the failed steps.
    pub fn failures(&self) -> impl Iterator<Item = &StepOutcome> {
        self.steps.iter().filter(|s| !s.is_passed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_report_tallies() {
        let steps = vec![
            StepOutcome::passed("page echoes the requested number"),
            StepOutcome::failed("total is positive", CheckFailure::new("total is 0")),
            StepOutcome::passed("user list is not empty"),
        ];

        let report = ScenarioReport::new("list users", Utc::now(), steps, 12);
        assert_eq!(report.total, 3);
        assert_eq!(report.passed, 2);
        assert_eq!(report.failed, 1);
        assert!(!report.all_passed());
        assert_eq!(report.failures().count(), 1);
    }

    #[test]
    fn test_empty_report_passes() {
        let report = ScenarioReport::new("delete user", Utc::now(), Vec::new(), 0);
        assert!(report.all_passed());
        assert_eq!(report.total, 0);
    }
}
