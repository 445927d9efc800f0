//! Request, response and error bodies for the identity mock endpoints.

use serde::{Deserialize, Serialize};

use crate::user::{ProviderRecord, User};

/// Query parameters accepted by `GET /user`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_user_id: Option<String>,
}

/// Body of `POST /authenticateUser`.
///
/// Exactly one of `username`, `phoneNumber`, `email` and exactly one of
/// `password`, `pin` must be supplied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pin: Option<String>,
}

/// Body of `POST /provider`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub provider: Option<ProviderRecord>,
}

/// Empty JSON object, `{}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empty {}

/// Result of `GET /user`: the matched user, or `{}` when nothing matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LookupResponse {
    Found(User),
    NotFound(Empty),
}

impl From<Option<User>> for LookupResponse {
    fn from(user: Option<User>) -> Self {
        match user {
            Some(user) => LookupResponse::Found(user),
            None => LookupResponse::NotFound(Empty {}),
        }
    }
}

/// Error body: `{"error": {"message": "..."}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorMessage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: ErrorMessage {
                message: message.into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_serializes_as_object() {
        assert_eq!(serde_json::to_string(&Empty {}).unwrap(), "{}");
    }

    #[test]
    fn test_lookup_response_not_found_is_empty_object() {
        let response = LookupResponse::from(None);
        assert_eq!(serde_json::to_string(&response).unwrap(), "{}");
    }

    #[test]
    fn test_lookup_response_parses_user() {
        let json = r#"{"userId": "1", "username": "user1"}"#;
        let response: LookupResponse = serde_json::from_str(json).unwrap();
        match response {
            LookupResponse::Found(user) => assert_eq!(user.user_id, "1"),
            LookupResponse::NotFound(_) => panic!("expected a user"),
        }
    }

    #[test]
    fn test_error_body_shape() {
        let body = ErrorBody::new("Unauthorized");
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"error":{"message":"Unauthorized"}}"#
        );
    }

    #[test]
    fn test_authenticate_request_distinguishes_null() {
        let json = r#"{"username": "user1", "email": null, "pin": ""}"#;
        let req: AuthenticateRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.username.as_deref(), Some("user1"));
        assert!(req.email.is_none());
        assert_eq!(req.pin.as_deref(), Some(""));
        assert!(req.password.is_none());
    }
}
