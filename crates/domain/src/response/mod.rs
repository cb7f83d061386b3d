//! HTTP Response domain types

mod envelope;
mod spec;

pub use envelope::{ResponseEnvelope, StatusCode};
pub use spec::{BodyShape, EnvelopeMismatch, ResponseSpec};
