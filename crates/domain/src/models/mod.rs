//! Typed response models and request payloads
//!
//! Read-only projections of the JSON bodies the API under test returns.
//! Unknown JSON fields are ignored; absent object fields deserialize to
//! `None` rather than zero-valued structs.

mod mutation;
mod payload;
mod users;

pub use mutation::{CreateUserResponse, UpdateUserResponse};
pub use payload::UserRequestPayload;
pub use users::{SingleUserResponse, SupportInfo, UserRecord, UsersListResponse};
