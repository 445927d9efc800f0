//! Provider attachment endpoint.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use identity_mock_common::{Empty, ProviderRequest};

use crate::error::{Error, Result, INVALID_REQUEST};
use crate::state::AppState;
use crate::store::StoreError;

/// Build the provider router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/provider", post(attach_provider))
}

/// POST /provider - Replace a user's provider record.
async fn attach_provider(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<ProviderRequest>, JsonRejection>,
) -> Result<Json<Empty>> {
    let Json(request) = payload?;
    if state.log_payloads() {
        tracing::info!(?request, "POST /provider");
    }

    let (Some(user_id), Some(provider)) = (request.user_id, request.provider) else {
        return Err(Error::InvalidRequest(INVALID_REQUEST));
    };

    state
        .store
        .set_provider(&user_id, provider)
        .await
        .map_err(|err| match err {
            StoreError::NotFound(_) => Error::InvalidRequest(INVALID_REQUEST),
            other => other.into(),
        })?;

    Ok(Json(Empty {}))
}
