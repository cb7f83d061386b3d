//! Concrete request composed from a template

use serde::Serialize;
use url::Url;

use super::{Header, Headers, HttpMethod, QueryParams, RequestSpec};
use crate::error::{DomainError, DomainResult};
use crate::logging::LogDetail;

/// A concrete request ready to be handed to the transport.
///
/// Built by [`RequestSpec::prepare`]: template defaults plus the verb,
/// absolute URL, and the scenario's query parameters and body payload.
/// The `Content-Type` header is present exactly when a body has been
/// attached through the with-body template variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Absolute request URL, without the query string.
    pub url: Url,
    /// Request headers, template defaults first.
    pub headers: Headers,
    /// Query parameters to append to the URL.
    pub query: QueryParams,
    /// Serialized JSON body, if one was attached.
    pub body: Option<String>,
    /// Logging verbosity inherited from the template.
    pub log: LogDetail,
    expects_body: bool,
}

impl PreparedRequest {
    pub(crate) fn from_template(spec: &RequestSpec, method: HttpMethod, url: Url) -> Self {
        Self {
            method,
            url,
            headers: spec.headers.clone(),
            query: QueryParams::new(),
            body: None,
            log: spec.log,
            expects_body: spec.expects_body(),
        }
    }

    /// Attaches query parameters (builder pattern).
    #[must_use]
    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Serializes a payload as the JSON body and sets the content type.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBody` if the template is the no-body
    /// variant or if the payload does not serialize.
    pub fn with_json_payload<P: Serialize>(mut self, payload: &P) -> DomainResult<Self> {
        if !self.expects_body {
            return Err(DomainError::InvalidBody(
                "template does not accept a body".to_string(),
            ));
        }
        let body =
            serde_json::to_string(payload).map_err(|e| DomainError::InvalidBody(e.to_string()))?;
        if !self.headers.contains("content-type") {
            self.headers
                .add(Header::new("Content-Type", "application/json"));
        }
        self.body = Some(body);
        Ok(self)
    }

    /// Returns the absolute URL with the query string appended.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidQuery` if the parameters fail to
    /// encode.
    pub fn full_url(&self) -> DomainResult<Url> {
        if self.query.is_empty() {
            return Ok(self.url.clone());
        }
        let mut url = self.url.clone();
        url.set_query(Some(&self.query.encode()?));
        Ok(url)
    }

    /// Returns the `Content-Type` header value, if present.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get("content-type")
    }

    /// Returns true if a body has been attached.
    #[must_use]
    pub const fn has_body(&self) -> bool {
        self.body.is_some()
    }
}
