//! User lookup and registration endpoints.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use identity_mock_common::{LookupQuery, LookupResponse, NewUser, User};

use crate::error::{Error, Result, INVALID_REQUEST};
use crate::state::AppState;
use crate::store::LookupField;

/// Build the user router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/user", get(lookup_user).post(register_user))
}

/// GET /user - Find the first user matching every supplied parameter.
///
/// No match is not an error: the response is `{}` with 200.
async fn lookup_user(
    State(state): State<Arc<AppState>>,
    query: std::result::Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<LookupResponse>> {
    let Query(pairs) = query?;
    let query = lookup_query_from_pairs(pairs);
    if state.log_payloads() {
        tracing::info!(?query, "GET /user");
    }

    let criteria = lookup_criteria(&query)?;
    let user = state.store.find_by_fields(&criteria).await;

    Ok(Json(LookupResponse::from(user)))
}

/// POST /user - Register a new user.
async fn register_user(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<NewUser>, JsonRejection>,
) -> Result<(StatusCode, Json<User>)> {
    let Json(new_user) = payload?;
    if state.log_payloads() {
        tracing::info!(?new_user, "POST /user");
    }

    validate_registration(&new_user)?;
    let user = state.store.create_unique(new_user).await?;
    tracing::debug!(user_id = %user.user_id, "Registered user");

    Ok((StatusCode::CREATED, Json(user)))
}

/// Collect the known lookup parameters. A repeated parameter keeps its first
/// value; unknown parameters are ignored.
pub fn lookup_query_from_pairs(pairs: Vec<(String, String)>) -> LookupQuery {
    let mut query = LookupQuery::default();
    for (key, value) in pairs {
        let slot = match key.as_str() {
            "email" => &mut query.email,
            "phoneNumber" => &mut query.phone_number,
            "userId" => &mut query.user_id,
            "username" => &mut query.username,
            "providerName" => &mut query.provider_name,
            "providerUserId" => &mut query.provider_user_id,
            _ => continue,
        };
        slot.get_or_insert(value);
    }
    query
}

/// Criteria from the supplied query parameters, in fixed priority order.
pub fn lookup_criteria(query: &LookupQuery) -> Result<Vec<(LookupField, String)>> {
    let criteria: Vec<(LookupField, String)> = [
        (LookupField::Email, &query.email),
        (LookupField::PhoneNumber, &query.phone_number),
        (LookupField::UserId, &query.user_id),
        (LookupField::Username, &query.username),
        (LookupField::ProviderName, &query.provider_name),
        (LookupField::ProviderUserId, &query.provider_user_id),
    ]
    .into_iter()
    .filter_map(|(field, value)| value.clone().map(|value| (field, value)))
    .collect();

    if criteria.is_empty() {
        return Err(Error::InvalidRequest(INVALID_REQUEST));
    }
    Ok(criteria)
}

/// A registration needs a username with a password or pin, or a phone
/// number, or an email, or a provider.
pub fn validate_registration(new_user: &NewUser) -> Result<()> {
    let has_login =
        new_user.username.is_some() && (new_user.password.is_some() || new_user.pin.is_some());

    if has_login
        || new_user.phone_number.is_some()
        || new_user.email.is_some()
        || new_user.provider.is_some()
    {
        Ok(())
    } else {
        Err(Error::InvalidRequest(INVALID_REQUEST))
    }
}
