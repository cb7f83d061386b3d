//! Process-wide harness bootstrap
//!
//! Holds the single base endpoint every scenario resolves its paths
//! against. Installed once before any scenario runs; falls back to the
//! public reqres.in API when never installed.

use std::sync::{Arc, OnceLock};

use thiserror::Error;

use vouch_application::ports::TransportError;
use vouch_application::scenario::Verifier;
use vouch_domain::endpoint::Endpoint;
use vouch_infrastructure::ReqwestTransport;

/// Base URL of the API under test.
pub const DEFAULT_BASE_URL: &str = "https://reqres.in";

/// Path prefix of the API under test.
pub const DEFAULT_BASE_PATH: &str = "/api";

static ENDPOINT: OnceLock<Endpoint> = OnceLock::new();

/// Errors from the one-time bootstrap.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BootstrapError {
    /// The base endpoint was already installed (or already resolved to
    /// the default by an earlier lookup).
    #[error("base endpoint already installed")]
    AlreadyInstalled,
}

/// Installs the process-wide base endpoint.
///
/// Must run before the first [`endpoint`] lookup; once the endpoint has
/// been resolved it never changes.
///
/// # Errors
///
/// Returns [`BootstrapError::AlreadyInstalled`] if an endpoint is
/// already in place.
pub fn install(endpoint: Endpoint) -> Result<(), BootstrapError> {
    ENDPOINT
        .set(endpoint)
        .map_err(|_| BootstrapError::AlreadyInstalled)
}

/// Returns the process-wide base endpoint, resolving to the reqres.in
/// default on first use if none was installed.
#[must_use]
pub fn endpoint() -> Endpoint {
    ENDPOINT.get_or_init(default_endpoint).clone()
}

#[allow(clippy::expect_used)]
fn default_endpoint() -> Endpoint {
    Endpoint::new(DEFAULT_BASE_URL, DEFAULT_BASE_PATH).expect("default endpoint is well-formed")
}

/// Builds a verifier wired to the live transport and the process-wide
/// base endpoint.
///
/// # Errors
///
/// Returns a [`TransportError`] if the HTTP client cannot be created.
pub fn live_verifier() -> Result<Verifier<ReqwestTransport>, TransportError> {
    Ok(Verifier::new(Arc::new(ReqwestTransport::new()?), endpoint()))
}
