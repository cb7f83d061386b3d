//! Logging verbosity policy for request and response templates.

use serde::{Deserialize, Serialize};

/// How much of a request or response a template asks to be logged.
///
/// Purely observational: the chosen detail level must never change what
/// is sent on the wire or how a response is judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogDetail {
    /// Log nothing.
    None,
    /// Log the request URI and headers only.
    #[default]
    UriHeaders,
    /// Log the full request or response, body included.
    Full,
}

impl LogDetail {
    /// Returns true if the URI and headers should be logged.
    #[must_use]
    pub const fn logs_headers(self) -> bool {
        matches!(self, Self::UriHeaders | Self::Full)
    }

    /// Returns true if the body should be logged.
    #[must_use]
    pub const fn logs_body(self) -> bool {
        matches!(self, Self::Full)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_levels() {
        assert!(!LogDetail::None.logs_headers());
        assert!(!LogDetail::None.logs_body());
        assert!(LogDetail::UriHeaders.logs_headers());
        assert!(!LogDetail::UriHeaders.logs_body());
        assert!(LogDetail::Full.logs_headers());
        assert!(LogDetail::Full.logs_body());
    }

    #[test]
    fn test_default_is_uri_headers() {
        assert_eq!(LogDetail::default(), LogDetail::UriHeaders);
    }
}
