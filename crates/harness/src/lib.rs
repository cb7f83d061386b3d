//! Vouch Harness - User-API contract verification
//!
//! Wires the domain templates, the scenario protocol, and the
//! infrastructure adapters into runnable verification scenarios for
//! the user-management API, plus the one-time process bootstrap.

pub mod bootstrap;
pub mod users;

pub use bootstrap::{
    BootstrapError, DEFAULT_BASE_PATH, DEFAULT_BASE_URL, endpoint, install, live_verifier,
};
