//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while composing requests or
/// validating templates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The provided URL is invalid or malformed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The HTTP method is not supported by the harness.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// The request body is invalid or not allowed for the template.
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// Query parameters could not be encoded.
    #[error("invalid query parameters: {0}")]
    InvalidQuery(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
