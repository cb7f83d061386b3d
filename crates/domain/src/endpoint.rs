//! Base endpoint configuration shared by all scenarios.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{DomainError, DomainResult};

/// The base endpoint every scenario resolves its request paths against.
///
/// Composed of a base URL (scheme + host) and a base path prefix,
/// e.g. `https://reqres.in` + `/api`. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    base_url: Url,
    base_path: String,
}

impl Endpoint {
    /// Creates an endpoint from a base URL and a base path prefix.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidUrl` if the URL is malformed or not
    /// an http/https URL, or if the path prefix does not start with `/`.
    pub fn new(base_url: &str, base_path: impl Into<String>) -> DomainResult<Self> {
        let url = Url::parse(base_url).map_err(|e| DomainError::InvalidUrl(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(DomainError::InvalidUrl(format!(
                "unsupported scheme: {}",
                url.scheme()
            )));
        }
        let base_path = base_path.into();
        if !base_path.is_empty() && !base_path.starts_with('/') {
            return Err(DomainError::InvalidUrl(format!(
                "base path must start with '/': {base_path}"
            )));
        }
        Ok(Self {
            base_url: url,
            base_path,
        })
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the base path prefix.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Resolves a relative resource path into an absolute request URL.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidUrl` if the combined path does not
    /// form a valid URL.
    pub fn join(&self, path: &str) -> DomainResult<Url> {
        let full = format!("{}{}", self.base_path, path);
        self.base_url
            .join(&full)
            .map_err(|e| DomainError::InvalidUrl(format!("{e}: {full}")))
    }
}
