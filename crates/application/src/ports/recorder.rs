//! Step recorder port

use vouch_domain::report::StepOutcome;

/// Port for recording individual verification steps.
///
/// Purely observational: implementations receive every step outcome as
/// it happens and must not influence control flow or results.
pub trait StepRecorder: Send + Sync {
    /// Records one step outcome for the named scenario.
    fn record(&self, scenario: &str, outcome: &StepOutcome);
}

/// A recorder that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRecorder;

impl StepRecorder for NullRecorder {
    fn record(&self, _scenario: &str, _outcome: &StepOutcome) {}
}
