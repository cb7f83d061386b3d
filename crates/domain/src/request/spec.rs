//! Reusable request template type

use serde::{Deserialize, Serialize};
use url::Url;

use super::{Header, Headers, HttpMethod, PreparedRequest};
use crate::logging::LogDetail;

/// What kind of body a request template allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyExpectation {
    /// The template carries no body (reads and deletes).
    #[default]
    None,
    /// The template carries a JSON body (creates and updates).
    Json,
}

impl BodyExpectation {
    /// Returns the content type implied by this expectation, if any.
    #[must_use]
    pub const fn content_type(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Json => Some("application/json"),
        }
    }
}

/// An immutable, reusable request template.
///
/// Bundles the default headers, logging verbosity, and body expectation
/// shared by every request built from it. Templates are constructed once
/// at process start and only ever borrowed by scenarios.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSpec {
    /// Template name, used in step reporting and logs.
    pub name: String,
    /// Default headers applied to every request built from this template.
    pub headers: Headers,
    /// Logging verbosity for requests built from this template.
    pub log: LogDetail,
    /// Whether requests built from this template carry a JSON body.
    pub body: BodyExpectation,
}

impl RequestSpec {
    /// Creates a template for requests that carry a JSON body.
    #[must_use]
    pub fn json_template(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            headers: Headers::new(),
            log: LogDetail::default(),
            body: BodyExpectation::Json,
        }
    }

    /// Creates a template for requests without a body.
    #[must_use]
    pub fn bare_template(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            headers: Headers::new(),
            log: LogDetail::default(),
            body: BodyExpectation::None,
        }
    }

    /// Sets the logging verbosity (builder pattern).
    #[must_use]
    pub const fn with_log(mut self, log: LogDetail) -> Self {
        self.log = log;
        self
    }

    /// Adds a default header (builder pattern).
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.add(Header::new(name, value));
        self
    }

    /// Returns true if requests built from this template carry a body.
    #[must_use]
    pub const fn expects_body(&self) -> bool {
        matches!(self.body, BodyExpectation::Json)
    }

    /// Composes a concrete request from this template, a verb, and an
    /// absolute URL. Query parameters and the body payload are attached
    /// on the returned [`PreparedRequest`].
    #[must_use]
    pub fn prepare(&self, method: HttpMethod, url: Url) -> PreparedRequest {
        PreparedRequest::from_template(self, method, url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_json_template_expects_body() {
        let spec = RequestSpec::json_template("with-body");
        assert!(spec.expects_body());
        assert_eq!(spec.body.content_type(), Some("application/json"));
    }

    #[test]
    fn test_bare_template_has_no_content_type() {
        let spec = RequestSpec::bare_template("no-body");
        assert!(!spec.expects_body());
        assert_eq!(spec.body.content_type(), None);
    }

    #[test]
    fn test_builder_sets_log_and_headers() {
        let spec = RequestSpec::bare_template("no-body")
            .with_log(LogDetail::Full)
            .with_header("Accept", "application/json");

        assert_eq!(spec.log, LogDetail::Full);
        assert_eq!(spec.headers.get("accept"), Some("application/json"));
    }
}
