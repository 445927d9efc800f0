//! Error types for the identity mock.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use identity_mock_common::ErrorBody;

use crate::store::{StoreError, UniqueField};

pub const INVALID_REQUEST: &str = "Invalid request";
pub const IDENTIFIER_REQUIRED: &str = "Exactly one identifier required";
pub const CREDENTIAL_REQUIRED: &str = "Exactly one credential required";

/// Request failures, each mapped to a fixed status and wire message.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// Missing or malformed input. Carries the wire message.
    #[error("{0}")]
    InvalidRequest(&'static str),

    #[error("{}", .0.taken_message())]
    Conflict(UniqueField),

    #[error("User does not exist")]
    UserNotFound,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::InvalidRequest(_) | Error::Conflict(_) => StatusCode::BAD_REQUEST,
            Error::UserNotFound => StatusCode::NOT_FOUND,
            Error::Unauthorized => StatusCode::UNAUTHORIZED,
            Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::debug!(status = %status.as_u16(), "Request rejected: {}", self);
        }

        (status, Json(ErrorBody::new(self.to_string()))).into_response()
    }
}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict(field) => Error::Conflict(field),
            StoreError::NotFound(_) => Error::UserNotFound,
            StoreError::RejectedId(_) => Error::Internal(err.to_string()),
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Unreadable JSON body: {}", rejection.body_text());
        Error::InvalidRequest(INVALID_REQUEST)
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!("Unreadable query string: {}", rejection.body_text());
        Error::InvalidRequest(INVALID_REQUEST)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_messages() {
        assert_eq!(Error::InvalidRequest(INVALID_REQUEST).to_string(), "Invalid request");
        assert_eq!(Error::Conflict(UniqueField::Username).to_string(), "Username taken");
        assert_eq!(Error::Conflict(UniqueField::PhoneNumber).to_string(), "phone taken");
        assert_eq!(Error::Conflict(UniqueField::Email).to_string(), "email taken");
        assert_eq!(Error::UserNotFound.to_string(), "User does not exist");
        assert_eq!(Error::Unauthorized.to_string(), "Unauthorized");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(Error::InvalidRequest(CREDENTIAL_REQUIRED).status(), StatusCode::BAD_REQUEST);
        assert_eq!(Error::Conflict(UniqueField::Email).status(), StatusCode::BAD_REQUEST);
        assert_eq!(Error::UserNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(Error::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            Error::Internal("boom".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_error_conversion() {
        assert_eq!(
            Error::from(StoreError::Conflict(UniqueField::Email)),
            Error::Conflict(UniqueField::Email)
        );
        assert!(matches!(
            Error::from(StoreError::RejectedId("1".to_string())),
            Error::Internal(_)
        ));
    }
}
