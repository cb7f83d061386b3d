//! Outgoing request payload for create and update calls

use serde::{Deserialize, Serialize};

/// The body sent when creating or updating a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRequestPayload {
    /// The user's name.
    pub name: String,
    /// The user's job title.
    pub job: String,
}

impl UserRequestPayload {
    /// Creates a new payload.
    #[must_use]
    pub fn new(name: impl Into<String>, job: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            job: job.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_serializes_to_flat_json() {
        let payload = UserRequestPayload::new("morpheus", "leader");
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"name":"morpheus","job":"leader"}"#);
    }

    #[test]
    fn test_round_trip() {
        let payload = UserRequestPayload::new("morpheus", "leader");
        let json = serde_json::to_string(&payload).unwrap();
        let back: UserRequestPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(back, payload);
    }
}
