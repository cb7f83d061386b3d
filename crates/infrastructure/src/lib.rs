//! Vouch Infrastructure - Adapters for the harness ports
//!
//! Implements the application layer's ports: the reqwest-backed
//! transport and the tracing-backed step recorder.

pub mod adapters;
pub mod recording;

pub use adapters::ReqwestTransport;
pub use recording::TracingStepRecorder;
