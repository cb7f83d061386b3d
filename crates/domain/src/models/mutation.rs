//! Typed projections of the create and update endpoints

use serde::{Deserialize, Serialize};

/// Response shape of a user creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserResponse {
    /// Echo of the requested name.
    pub name: String,
    /// Echo of the requested job.
    pub job: String,
    /// Server-assigned id, a non-blank string.
    pub id: String,
    /// Creation timestamp, ISO-8601 with millisecond precision.
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Response shape of a user update.
///
/// The API assigns ids only on creation, so `id` must stay absent here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUserResponse {
    /// Echo of the requested name.
    pub name: String,
    /// Echo of the requested job.
    pub job: String,
    /// Absent on updates; `Some` indicates contract drift.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Update timestamp, ISO-8601 with millisecond precision.
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}
