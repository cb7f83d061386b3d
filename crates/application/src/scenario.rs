//! Scenario protocol
//!
//! One scenario covers a single API interaction end-to-end, in four
//! strictly sequential phases: compose the request (Arrange), dispatch
//! it through the transport (Act), validate the response envelope, then
//! run field assertions over the deserialized model. The first three
//! phases live in [`Verifier`]; the assertion phase runs through
//! [`StepLog`], which isolates failures so one bad field never hides
//! the rest.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;

use vouch_domain::endpoint::Endpoint;
use vouch_domain::error::{DomainError, DomainResult};
use vouch_domain::logging::LogDetail;
use vouch_domain::report::{ScenarioReport, StepOutcome};
use vouch_domain::request::{HttpMethod, PreparedRequest, QueryParam, QueryParams, RequestSpec};
use vouch_domain::response::{ResponseEnvelope, ResponseSpec};

use crate::error::{ScenarioError, ScenarioResult};
use crate::ports::{StepRecorder, Transport};

/// One verification scenario: a request template, a verb and path, and
/// the response expectation to validate against.
///
/// Scenarios borrow their templates and never mutate them, so any
/// number of scenarios can share the same registry entries.
#[derive(Debug, Clone)]
pub struct Scenario<'s> {
    /// Scenario name, used for reporting.
    pub name: &'s str,
    /// The request template to build from.
    pub request: &'s RequestSpec,
    /// HTTP verb.
    pub method: HttpMethod,
    /// Resource path relative to the base endpoint.
    pub path: &'s str,
    /// Query parameters to send.
    pub query: QueryParams,
    /// JSON payload to send, if the template allows a body.
    pub body: Option<serde_json::Value>,
    /// The response expectation template.
    pub expect: &'s ResponseSpec,
}

impl<'s> Scenario<'s> {
    /// Creates a scenario with no query parameters or body.
    #[must_use]
    pub const fn new(
        name: &'s str,
        request: &'s RequestSpec,
        method: HttpMethod,
        path: &'s str,
        expect: &'s ResponseSpec,
    ) -> Self {
        Self {
            name,
            request,
            method,
            path,
            query: QueryParams::new(),
            body: None,
            expect,
        }
    }

    /// Adds a query parameter (builder pattern).
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.add(QueryParam::new(key, value));
        self
    }

    /// Attaches a JSON payload (builder pattern).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBody` if the payload does not
    /// serialize.
    pub fn with_payload<P: Serialize>(mut self, payload: &P) -> DomainResult<Self> {
        let value =
            serde_json::to_value(payload).map_err(|e| DomainError::InvalidBody(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }
}

/// Runs scenarios through the transport and validates their envelopes.
pub struct Verifier<T> {
    transport: Arc<T>,
    endpoint: Endpoint,
}

impl<T: Transport> Verifier<T> {
    /// Creates a verifier bound to a transport and a base endpoint.
    pub const fn new(transport: Arc<T>, endpoint: Endpoint) -> Self {
        Self {
            transport,
            endpoint,
        }
    }

    /// Returns the base endpoint this verifier resolves paths against.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Runs the Arrange, Act, and ValidateEnvelope phases and returns
    /// the validated raw envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError`] if the request cannot be composed, the
    /// transport fails, or the envelope differs from the expectation.
    pub async fn dispatch(&self, scenario: &Scenario<'_>) -> ScenarioResult<ResponseEnvelope> {
        // Arrange
        let url = self.endpoint.join(scenario.path)?;
        let mut request = scenario.request.prepare(scenario.method, url);
        if !scenario.query.is_empty() {
            request = request.with_query(scenario.query.clone());
        }
        if let Some(body) = &scenario.body {
            request = request.with_json_payload(body)?;
        }
        log_request(&request);

        // Act
        let envelope = self.transport.send(&request).await?;
        log_response(scenario.expect.log, &envelope);

        // ValidateEnvelope
        scenario.expect.check(&envelope)?;
        Ok(envelope)
    }

    /// Runs [`Self::dispatch`] and deserializes the validated body into
    /// the target response model.
    ///
    /// # Errors
    ///
    /// Additionally returns [`ScenarioError::Deserialize`] if the body
    /// does not conform to the model's shape.
    pub async fn dispatch_as<M: DeserializeOwned>(
        &self,
        scenario: &Scenario<'_>,
    ) -> ScenarioResult<M> {
        let envelope = self.dispatch(scenario).await?;
        serde_json::from_slice(&envelope.body).map_err(|e| ScenarioError::Deserialize {
            model: std::any::type_name::<M>(),
            detail: e.to_string(),
        })
    }
}

fn log_request(request: &PreparedRequest) {
    match request.log {
        LogDetail::None => {}
        LogDetail::UriHeaders => tracing::info!(
            method = %request.method,
            url = %request.url,
            query = ?request.query,
            headers = ?request.headers,
            "dispatching request"
        ),
        LogDetail::Full => tracing::info!(
            method = %request.method,
            url = %request.url,
            query = ?request.query,
            headers = ?request.headers,
            body = request.body.as_deref().unwrap_or(""),
            "dispatching request"
        ),
    }
}

fn log_response(log: LogDetail, envelope: &ResponseEnvelope) {
    match log {
        LogDetail::None => {}
        LogDetail::UriHeaders => tracing::info!(
            status = %envelope.status,
            headers = ?envelope.headers,
            "received response"
        ),
        LogDetail::Full => tracing::info!(
            status = %envelope.status,
            headers = ?envelope.headers,
            body = %envelope.body_text(),
            "received response"
        ),
    }
}

/// Soft-assertion collector for the field-assertion phase.
///
/// Each check runs as its own named step: the outcome is recorded with
/// the [`StepRecorder`] immediately and accumulated for the final
/// report. A failing step never prevents later steps from running.
pub struct StepLog<'a, R: StepRecorder + ?Sized> {
    scenario: &'a str,
    recorder: &'a R,
    started: Instant,
    started_at: chrono::DateTime<Utc>,
    steps: Vec<StepOutcome>,
}

impl<'a, R: StepRecorder + ?Sized> StepLog<'a, R> {
    /// Opens a step log for the named scenario.
    #[must_use]
    pub fn new(scenario: &'a str, recorder: &'a R) -> Self {
        Self {
            scenario,
            recorder,
            started: Instant::now(),
            started_at: Utc::now(),
            steps: Vec::new(),
        }
    }

    /// Runs a named check and records its outcome.
    pub fn check(
        &mut self,
        name: impl Into<String>,
        check: impl FnOnce() -> vouch_domain::checks::CheckResult,
    ) {
        let name = name.into();
        let outcome = match check() {
            Ok(()) => StepOutcome::passed(name),
            Err(failure) => StepOutcome::failed(name, failure),
        };
        self.recorder.record(self.scenario, &outcome);
        self.steps.push(outcome);
    }

    /// Closes the log and produces the scenario report.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn finish(self) -> ScenarioReport {
        let duration_ms = self.started.elapsed().as_millis() as u64;
        ScenarioReport::new(self.scenario, self.started_at, self.steps, duration_ms)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ports::{NullRecorder, TransportError};
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use vouch_domain::checks;
    use vouch_domain::response::{EnvelopeMismatch, StatusCode};

    /// Transport double that replays a scripted result and captures
    /// every request it sees.
    struct ScriptedTransport {
        result: Result<ResponseEnvelope, TransportError>,
        seen: Mutex<Vec<PreparedRequest>>,
    }

    impl ScriptedTransport {
        fn replying(status: u16, body: &[u8]) -> Self {
            Self {
                result: Ok(ResponseEnvelope::new(
                    status,
                    HashMap::new(),
                    body.to_vec(),
                )),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn failing(error: TransportError) -> Self {
            Self {
                result: Err(error),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Transport for ScriptedTransport {
        async fn send(
            &self,
            request: &PreparedRequest,
        ) -> Result<ResponseEnvelope, TransportError> {
            self.seen.lock().unwrap().push(request.clone());
            self.result.clone()
        }
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Echo {
        name: String,
    }

    fn endpoint() -> Endpoint {
        Endpoint::new("https://reqres.in", "/api").unwrap()
    }

    fn no_body() -> RequestSpec {
        RequestSpec::bare_template("no-body")
    }

    fn with_body() -> RequestSpec {
        RequestSpec::json_template("with-body")
    }

    fn ok_spec() -> ResponseSpec {
        ResponseSpec::new("successful", 200)
    }

    #[tokio::test]
    async fn test_dispatch_composes_and_validates() {
        let transport = Arc::new(ScriptedTransport::replying(200, br#"{"name":"neo"}"#));
        let verifier = Verifier::new(Arc::clone(&transport), endpoint());
        let request = no_body();
        let expect = ok_spec();

        let scenario = Scenario::new("lookup", &request, HttpMethod::Get, "/users/2", &expect)
            .with_query("page", "2");
        let envelope = verifier.dispatch(&scenario).await.unwrap();
        assert_eq!(envelope.status, StatusCode::new(200));

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(
            seen[0].full_url().unwrap().as_str(),
            "https://reqres.in/api/users/2?page=2"
        );
        assert_eq!(seen[0].content_type(), None);
    }

    #[tokio::test]
    async fn test_dispatch_attaches_payload_with_content_type() {
        let transport = Arc::new(ScriptedTransport::replying(200, br#"{"name":"neo"}"#));
        let verifier = Verifier::new(Arc::clone(&transport), endpoint());
        let request = with_body();
        let expect = ok_spec();

        let scenario = Scenario::new("create", &request, HttpMethod::Post, "/users", &expect)
            .with_payload(&serde_json::json!({"name": "neo"}))
            .unwrap();
        verifier.dispatch(&scenario).await.unwrap();

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen[0].content_type(), Some("application/json"));
        assert_eq!(seen[0].body.as_deref(), Some(r#"{"name":"neo"}"#));
    }

    #[tokio::test]
    async fn test_dispatch_as_deserializes_model() {
        let transport = Arc::new(ScriptedTransport::replying(200, br#"{"name":"neo"}"#));
        let verifier = Verifier::new(transport, endpoint());
        let request = no_body();
        let expect = ok_spec();

        let scenario = Scenario::new("lookup", &request, HttpMethod::Get, "/users/2", &expect);
        let model: Echo = verifier.dispatch_as(&scenario).await.unwrap();
        assert_eq!(
            model,
            Echo {
                name: "neo".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_envelope_mismatch_is_a_hard_failure() {
        let transport = Arc::new(ScriptedTransport::replying(500, b""));
        let verifier = Verifier::new(transport, endpoint());
        let request = no_body();
        let expect = ok_spec();

        let scenario = Scenario::new("lookup", &request, HttpMethod::Get, "/users/2", &expect);
        let err = verifier.dispatch(&scenario).await.unwrap_err();
        assert_eq!(
            err,
            ScenarioError::Envelope(EnvelopeMismatch::Status {
                expected: StatusCode::new(200),
                actual: StatusCode::new(500),
            })
        );
    }

    #[tokio::test]
    async fn test_schema_drift_is_distinct_from_field_failures() {
        let transport = Arc::new(ScriptedTransport::replying(200, br#"{"name":42}"#));
        let verifier = Verifier::new(transport, endpoint());
        let request = no_body();
        let expect = ok_spec();

        let scenario = Scenario::new("lookup", &request, HttpMethod::Get, "/users/2", &expect);
        let err = verifier.dispatch_as::<Echo>(&scenario).await.unwrap_err();
        assert!(matches!(err, ScenarioError::Deserialize { .. }));
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let transport = Arc::new(ScriptedTransport::failing(TransportError::Timeout {
            timeout_ms: 30_000,
        }));
        let verifier = Verifier::new(transport, endpoint());
        let request = no_body();
        let expect = ok_spec();

        let scenario = Scenario::new("lookup", &request, HttpMethod::Get, "/users/2", &expect);
        let err = verifier.dispatch(&scenario).await.unwrap_err();
        assert!(matches!(
            err,
            ScenarioError::Transport(TransportError::Timeout { .. })
        ));
    }

    #[test]
    fn test_step_log_isolates_failures() {
        let recorder = NullRecorder;
        let mut steps = StepLog::new("list users", &recorder);

        steps.check("first", || checks::eq("page", &1, &2));
        steps.check("second", || checks::eq("total", &12, &12));
        steps.check("third", || checks::non_blank("id", ""));

        let report = steps.finish();
        assert_eq!(report.total, 3);
        assert_eq!(report.passed, 1);
        assert_eq!(report.failed, 2);
        // The failing first step did not stop the later ones.
        assert!(report.steps[1].is_passed());
    }
}
