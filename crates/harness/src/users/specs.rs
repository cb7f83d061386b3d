//! Specification registry for the users resource
//!
//! The fixed, named set of request and response templates every user
//! scenario builds from. Each template is fully configured here and
//! only ever borrowed; nothing in the registry is mutable.

use std::sync::LazyLock;

use vouch_domain::logging::LogDetail;
use vouch_domain::request::RequestSpec;
use vouch_domain::response::{BodyShape, ResponseSpec};

static WITH_BODY_REQUEST: LazyLock<RequestSpec> =
    LazyLock::new(|| RequestSpec::json_template("with-body").with_log(LogDetail::Full));

static NO_BODY_REQUEST: LazyLock<RequestSpec> =
    LazyLock::new(|| RequestSpec::bare_template("no-body").with_log(LogDetail::UriHeaders));

static SUCCESS_RESPONSE: LazyLock<ResponseSpec> =
    LazyLock::new(|| ResponseSpec::new("successful", 200).with_log(LogDetail::Full));

static CREATED_RESPONSE: LazyLock<ResponseSpec> =
    LazyLock::new(|| ResponseSpec::new("created", 201).with_log(LogDetail::Full));

static NO_CONTENT_RESPONSE: LazyLock<ResponseSpec> = LazyLock::new(|| {
    ResponseSpec::new("no content", 204)
        .with_log(LogDetail::Full)
        .with_body_shape(BodyShape::EmptyOrNull)
});

static NOT_FOUND_RESPONSE: LazyLock<ResponseSpec> =
    LazyLock::new(|| ResponseSpec::new("not found", 404).with_log(LogDetail::Full));

/// Template for create and update requests, which carry a JSON body.
#[must_use]
pub fn with_body_request() -> &'static RequestSpec {
    &WITH_BODY_REQUEST
}

/// Template for read and delete requests, which carry no body.
#[must_use]
pub fn no_body_request() -> &'static RequestSpec {
    &NO_BODY_REQUEST
}

/// Expectation for plain 200 responses.
#[must_use]
pub fn success_response() -> &'static ResponseSpec {
    &SUCCESS_RESPONSE
}

/// Expectation for 201 creation responses.
#[must_use]
pub fn created_response() -> &'static ResponseSpec {
    &CREATED_RESPONSE
}

/// Expectation for 204 responses, whose body must be empty or null.
#[must_use]
pub fn no_content_response() -> &'static ResponseSpec {
    &NO_CONTENT_RESPONSE
}

/// Expectation for 404 responses.
#[must_use]
pub fn not_found_response() -> &'static ResponseSpec {
    &NOT_FOUND_RESPONSE
}
