//! Step recorder implementation backed by tracing.

use vouch_application::ports::StepRecorder;
use vouch_domain::report::{StepOutcome, StepStatus};

/// Records each verification step as a structured tracing event.
///
/// Passed steps are emitted at `INFO`, failed steps at `ERROR`, each
/// tagged with the scenario and step names.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingStepRecorder;

impl TracingStepRecorder {
    /// Creates a new recorder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl StepRecorder for TracingStepRecorder {
    fn record(&self, scenario: &str, outcome: &StepOutcome) {
        match &outcome.status {
            StepStatus::Passed => {
                tracing::info!(scenario, step = %outcome.name, "step passed");
            }
            StepStatus::Failed { failure } => {
                tracing::error!(scenario, step = %outcome.name, %failure, "step failed");
            }
        }
    }
}
