//! Credential check endpoint.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use identity_mock_common::{AuthenticateRequest, User};

use crate::error::{Error, Result, CREDENTIAL_REQUIRED, IDENTIFIER_REQUIRED};
use crate::state::AppState;
use crate::store::LookupField;

/// Build the authentication router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/authenticateUser", post(authenticate_user))
}

/// Secret supplied to authenticate an identified user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credential<'a> {
    Password(&'a str),
    Pin(&'a str),
}

impl Credential<'_> {
    /// Exact comparison against the stored secret. An unset secret never matches.
    pub fn matches(&self, user: &User) -> bool {
        match self {
            Credential::Password(password) => user.password.as_deref() == Some(*password),
            Credential::Pin(pin) => user.pin.as_deref() == Some(*pin),
        }
    }
}

/// POST /authenticateUser - Verify one identifier against one credential.
async fn authenticate_user(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<AuthenticateRequest>, JsonRejection>,
) -> Result<Json<User>> {
    let Json(request) = payload?;
    if state.log_payloads() {
        tracing::info!(?request, "POST /authenticateUser");
    }

    let (field, value) = select_identifier(&request)?;
    let credential = select_credential(&request)?;

    let user = state
        .store
        .find_by_field(field, value)
        .await
        .filter(|user| !user.user_id.is_empty())
        .ok_or(Error::UserNotFound)?;

    if !credential.matches(&user) {
        tracing::debug!(user_id = %user.user_id, "Credential mismatch");
        return Err(Error::Unauthorized);
    }

    Ok(Json(user))
}

/// The single identifier to search by.
///
/// Exactly one of username, phone number and email must be present. When
/// picking the field, username is checked first, then phone number, then
/// email.
pub fn select_identifier(request: &AuthenticateRequest) -> Result<(LookupField, &str)> {
    let supplied = [
        request.username.is_some(),
        request.phone_number.is_some(),
        request.email.is_some(),
    ]
    .into_iter()
    .filter(|present| *present)
    .count();
    if supplied != 1 {
        return Err(Error::InvalidRequest(IDENTIFIER_REQUIRED));
    }

    if let Some(username) = request.username.as_deref() {
        Ok((LookupField::Username, username))
    } else if let Some(phone_number) = request.phone_number.as_deref() {
        Ok((LookupField::PhoneNumber, phone_number))
    } else if let Some(email) = request.email.as_deref() {
        Ok((LookupField::Email, email))
    } else {
        Err(Error::InvalidRequest(IDENTIFIER_REQUIRED))
    }
}

/// The single credential to check. Exactly one of password and pin.
pub fn select_credential(request: &AuthenticateRequest) -> Result<Credential<'_>> {
    match (request.password.as_deref(), request.pin.as_deref()) {
        (Some(password), None) => Ok(Credential::Password(password)),
        (None, Some(pin)) => Ok(Credential::Pin(pin)),
        _ => Err(Error::InvalidRequest(CREDENTIAL_REQUIRED)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(
        username: Option<&str>,
        phone_number: Option<&str>,
        email: Option<&str>,
    ) -> AuthenticateRequest {
        AuthenticateRequest {
            username: username.map(String::from),
            phone_number: phone_number.map(String::from),
            email: email.map(String::from),
            password: Some("pass1".to_string()),
            pin: None,
        }
    }

    #[test]
    fn test_identifier_exactly_one() {
        assert_eq!(
            select_identifier(&request(None, None, None)),
            Err(Error::InvalidRequest(IDENTIFIER_REQUIRED))
        );
        assert_eq!(
            select_identifier(&request(Some("user1"), None, Some("john.doe@test.com"))),
            Err(Error::InvalidRequest(IDENTIFIER_REQUIRED))
        );
        assert_eq!(
            select_identifier(&request(Some("a"), Some("b"), Some("c"))),
            Err(Error::InvalidRequest(IDENTIFIER_REQUIRED))
        );
    }

    #[test]
    fn test_identifier_field_selection() {
        assert_eq!(
            select_identifier(&request(None, Some("777777777"), None)).unwrap(),
            (LookupField::PhoneNumber, "777777777")
        );
        assert_eq!(
            select_identifier(&request(None, None, Some("jane.doe@test.com"))).unwrap(),
            (LookupField::Email, "jane.doe@test.com")
        );
        assert_eq!(
            select_identifier(&request(Some(""), None, None)).unwrap(),
            (LookupField::Username, "")
        );
    }

    #[test]
    fn test_credential_exactly_one() {
        let mut req = request(Some("user1"), None, None);
        assert_eq!(select_credential(&req).unwrap(), Credential::Password("pass1"));

        req.pin = Some("1234".to_string());
        assert_eq!(
            select_credential(&req),
            Err(Error::InvalidRequest(CREDENTIAL_REQUIRED))
        );

        req.password = None;
        assert_eq!(select_credential(&req).unwrap(), Credential::Pin("1234"));

        req.pin = None;
        assert_eq!(
            select_credential(&req),
            Err(Error::InvalidRequest(CREDENTIAL_REQUIRED))
        );
    }

    #[test]
    fn test_credential_matches_exactly() {
        let user = User {
            user_id: "1".to_string(),
            password: Some("pass1".to_string()),
            ..Default::default()
        };

        assert!(Credential::Password("pass1").matches(&user));
        assert!(!Credential::Password("PASS1").matches(&user));
        assert!(!Credential::Pin("").matches(&user));
    }
}
