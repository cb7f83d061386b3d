//! Scenario error taxonomy

use thiserror::Error;
use vouch_domain::error::DomainError;
use vouch_domain::response::EnvelopeMismatch;

use crate::ports::TransportError;

/// Hard failures that abort a scenario.
///
/// Field-assertion failures are not errors in this sense: they are
/// collected softly into the scenario report. Everything here stops the
/// scenario before or instead of the field-assertion phase.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScenarioError {
    /// The request could not be composed.
    #[error("could not compose request: {0}")]
    Compose(#[from] DomainError),

    /// The response envelope differed from the expectation template.
    #[error("envelope mismatch: {0}")]
    Envelope(#[from] EnvelopeMismatch),

    /// The body did not conform to the targeted response model.
    ///
    /// Distinct from field-assertion failures: this indicates schema
    /// drift rather than a value mismatch.
    #[error("response did not match the {model} shape: {detail}")]
    Deserialize {
        /// The model type the body was deserialized into.
        model: &'static str,
        /// Deserializer error detail.
        detail: String,
    },

    /// The transport failed outright.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Result type alias for scenario execution.
pub type ScenarioResult<T> = Result<T, ScenarioError>;
