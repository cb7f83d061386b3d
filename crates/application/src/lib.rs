//! Vouch Application - Scenario protocol and ports
//!
//! This crate defines the verification protocol with:
//! - Port traits for the transport and step-recording collaborators
//! - The scenario state machine (Arrange, Act, ValidateEnvelope,
//!   AssertFields)
//! - The hard-failure error taxonomy

pub mod error;
pub mod ports;
pub mod scenario;

pub use error::{ScenarioError, ScenarioResult};
pub use ports::{NullRecorder, StepRecorder, Transport, TransportError};
pub use scenario::{Scenario, StepLog, Verifier};
