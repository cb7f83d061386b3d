//! Reusable response expectation template

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{ResponseEnvelope, StatusCode};
use crate::logging::LogDetail;

/// A structural predicate applied to the raw body before deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyShape {
    /// The body must be empty, whitespace, or the JSON literal `null`.
    EmptyOrNull,
}

impl BodyShape {
    /// Returns true if the envelope's body satisfies this shape.
    #[must_use]
    pub fn matches(self, envelope: &ResponseEnvelope) -> bool {
        match self {
            Self::EmptyOrNull => envelope.is_empty_or_null(),
        }
    }

    /// Returns a short description of the expected shape.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::EmptyOrNull => "empty or null body",
        }
    }
}

/// The envelope differed from what a [`ResponseSpec`] expects.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EnvelopeMismatch {
    /// The status code differed from the expected one.
    #[error("expected status {expected}, got {actual}")]
    Status {
        /// Status code the template expects.
        expected: StatusCode,
        /// Status code actually received.
        actual: StatusCode,
    },

    /// The body did not satisfy the expected shape.
    #[error("expected {expected}, got: {preview}")]
    BodyShape {
        /// Description of the expected shape.
        expected: &'static str,
        /// Truncated preview of the offending body.
        preview: String,
    },
}

/// An immutable, reusable response expectation template.
///
/// Bundles the expected status code, logging verbosity, and an optional
/// body-shape predicate. Same lifecycle as [`crate::request::RequestSpec`]:
/// constructed once, only ever borrowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseSpec {
    /// Template name, used in step reporting and logs.
    pub name: String,
    /// The status code every validated response must carry.
    pub status: StatusCode,
    /// Logging verbosity for responses validated by this template.
    pub log: LogDetail,
    /// Optional structural predicate on the raw body.
    pub body_shape: Option<BodyShape>,
}

impl ResponseSpec {
    /// Creates a template expecting the given status code.
    #[must_use]
    pub fn new(name: impl Into<String>, status: impl Into<StatusCode>) -> Self {
        Self {
            name: name.into(),
            status: status.into(),
            log: LogDetail::default(),
            body_shape: None,
        }
    }

    /// Sets the logging verbosity (builder pattern).
    #[must_use]
    pub const fn with_log(mut self, log: LogDetail) -> Self {
        self.log = log;
        self
    }

    /// Sets the body-shape predicate (builder pattern).
    #[must_use]
    pub const fn with_body_shape(mut self, shape: BodyShape) -> Self {
        self.body_shape = Some(shape);
        self
    }

    /// Validates an envelope against this template.
    ///
    /// The status code is compared first; on mismatch no further checks
    /// run. The body-shape predicate, if configured, is applied to the
    /// raw body before any deserialization.
    ///
    /// # Errors
    ///
    /// Returns [`EnvelopeMismatch`] describing the first difference.
    pub fn check(&self, envelope: &ResponseEnvelope) -> Result<(), EnvelopeMismatch> {
        if envelope.status != self.status {
            return Err(EnvelopeMismatch::Status {
                expected: self.status,
                actual: envelope.status,
            });
        }
        if let Some(shape) = self.body_shape
            && !shape.matches(envelope)
        {
            return Err(EnvelopeMismatch::BodyShape {
                expected: shape.describe(),
                preview: preview(&envelope.body_text()),
            });
        }
        Ok(())
    }
}

fn preview(body: &str) -> String {
    const MAX: usize = 100;
    if body.chars().count() > MAX {
        let truncated: String = body.chars().take(MAX).collect();
        format!("{truncated}...")
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn envelope(status: u16, body: &[u8]) -> ResponseEnvelope {
        ResponseEnvelope::new(status, HashMap::new(), body.to_vec())
    }

    #[test]
    fn test_status_match() {
        let spec = ResponseSpec::new("successful", 200);
        assert!(spec.check(&envelope(200, b"{}")).is_ok());
    }

    #[test]
    fn test_status_mismatch_reports_both_codes() {
        let spec = ResponseSpec::new("successful", 200);
        let err = spec.check(&envelope(500, b"")).expect_err("must mismatch");
        assert_eq!(
            err,
            EnvelopeMismatch::Status {
                expected: StatusCode::new(200),
                actual: StatusCode::new(500),
            }
        );
    }

    #[test]
    fn test_body_shape_rejects_non_empty_body() {
        let spec = ResponseSpec::new("no content", 204).with_body_shape(BodyShape::EmptyOrNull);
        assert!(spec.check(&envelope(204, b"")).is_ok());
        assert!(spec.check(&envelope(204, b"null")).is_ok());

        let err = spec
            .check(&envelope(204, b"unexpected"))
            .expect_err("must mismatch");
        assert!(matches!(err, EnvelopeMismatch::BodyShape { .. }));
    }

    #[test]
    fn test_status_checked_before_body_shape() {
        let spec = ResponseSpec::new("no content", 204).with_body_shape(BodyShape::EmptyOrNull);
        let err = spec
            .check(&envelope(200, b"unexpected"))
            .expect_err("must mismatch");
        assert!(matches!(err, EnvelopeMismatch::Status { .. }));
    }
}
