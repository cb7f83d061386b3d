//! Typed projections of the user read endpoints

use serde::{Deserialize, Serialize};

/// A single user record as the API returns it.
///
/// Field names follow the wire format: `first_name`, `last_name`, and
/// `avatar` are fixed by the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Numeric user id.
    pub id: u64,
    /// The user's email address.
    pub email: String,
    /// The user's first name.
    pub first_name: String,
    /// The user's last name.
    pub last_name: String,
    /// URL of the user's avatar image.
    pub avatar: String,
}

/// The support banner attached to single-user responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportInfo {
    /// Support link.
    pub url: String,
    /// Support blurb.
    pub text: String,
}

/// Response shape of the paginated user listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersListResponse {
    /// The page that was returned.
    pub page: u32,
    /// Total number of users across all pages.
    pub total: u32,
    /// The users on this page, in API order.
    #[serde(default)]
    pub data: Vec<UserRecord>,
}

/// Response shape of a single-user lookup.
///
/// Both fields stay `None` when the JSON omits them, as it does on a
/// 404 body. The deserializer must never fabricate empty records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleUserResponse {
    /// The user, absent when not found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<UserRecord>,
    /// The support banner, absent when not found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support: Option<SupportInfo>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_user_deserializes_wire_names() {
        let json = r#"{
            "data": {
                "id": 2,
                "email": "janet.weaver@reqres.in",
                "first_name": "Janet",
                "last_name": "Weaver",
                "avatar": "https://reqres.in/img/faces/2-image.jpg"
            },
            "support": {
                "url": "https://reqres.in/#support-heading",
                "text": "To keep ReqRes free, contributions are appreciated!"
            }
        }"#;

        let response: SingleUserResponse = serde_json::from_str(json).unwrap();
        let user = response.data.unwrap();
        assert_eq!(user.id, 2);
        assert_eq!(user.first_name, "Janet");
        assert_eq!(user.last_name, "Weaver");
        assert!(response.support.is_some());
    }

    #[test]
    fn test_not_found_body_leaves_fields_absent() {
        let response: SingleUserResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.data, None);
        assert_eq!(response.support, None);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r#"{"page": 2, "per_page": 6, "total": 12, "total_pages": 2, "data": []}"#;
        let response: UsersListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.page, 2);
        assert_eq!(response.total, 12);
        assert!(response.data.is_empty());
    }

    #[test]
    fn test_non_numeric_id_is_a_deserialization_error() {
        let json = r#"{"data": {"id": "two", "email": "", "first_name": "", "last_name": "", "avatar": ""}}"#;
        let result = serde_json::from_str::<SingleUserResponse>(json);
        assert!(result.is_err());
    }
}
