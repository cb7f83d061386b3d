//! Vouch Domain - Core contract-testing types
//!
//! This crate defines the domain model for the Vouch harness: request
//! and response templates, the raw response envelope, typed response
//! models, and the step/report types the verification protocol builds
//! on. All types here are pure Rust with no I/O dependencies.

pub mod checks;
pub mod endpoint;
pub mod error;
pub mod logging;
pub mod models;
pub mod report;
pub mod request;
pub mod response;

pub use checks::{CheckFailure, CheckResult, TIMESTAMP_MILLIS_UTC};
pub use endpoint::Endpoint;
pub use error::{DomainError, DomainResult};
pub use logging::LogDetail;
pub use models::{
    CreateUserResponse, SingleUserResponse, SupportInfo, UpdateUserResponse, UserRecord,
    UserRequestPayload, UsersListResponse,
};
pub use report::{ScenarioReport, StepOutcome, StepStatus};
pub use request::{
    BodyExpectation, Header, Headers, HttpMethod, PreparedRequest, QueryParam, QueryParams,
    RequestSpec,
};
pub use response::{BodyShape, EnvelopeMismatch, ResponseEnvelope, ResponseSpec, StatusCode};
