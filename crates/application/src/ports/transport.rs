//! Transport port

use async_trait::async_trait;
use thiserror::Error;

use vouch_domain::request::PreparedRequest;
use vouch_domain::response::ResponseEnvelope;

/// Errors the transport can surface.
///
/// All of them are unrecoverable for the scenario that hit them; retry
/// policy, if any, belongs to the transport implementation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The request did not complete within the transport's deadline.
    #[error("request timed out after {timeout_ms} ms")]
    Timeout {
        /// The deadline that was exceeded, in milliseconds.
        timeout_ms: u64,
    },

    /// The host name could not be resolved.
    #[error("could not resolve host {host}: {message}")]
    Dns {
        /// Host that failed to resolve.
        host: String,
        /// Resolver error detail.
        message: String,
    },

    /// The host refused the connection.
    #[error("connection refused by {host}")]
    ConnectionRefused {
        /// Host that refused.
        host: String,
    },

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The request URL was rejected by the transport.
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),

    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),

    /// Any other transport-level failure.
    #[error("transport error: {0}")]
    Other(String),
}

/// Port for dispatching prepared requests.
///
/// Abstracts the HTTP client so the scenario protocol stays independent
/// of any specific library. Implementations own the per-request timeout.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends a prepared request and returns the raw response envelope.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] on network-level failure; HTTP error
    /// statuses are not transport errors and come back in the envelope.
    async fn send(&self, request: &PreparedRequest) -> Result<ResponseEnvelope, TransportError>;
}
