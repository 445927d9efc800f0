//! Notification stubs. Nothing is sent; the payload is only logged.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::Uri;
use axum::routing::post;
use axum::{Json, Router};
use identity_mock_common::Empty;

use crate::state::AppState;

/// Build the notification router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/sendEmail", post(send_notification))
        .route("/sendSms", post(send_notification))
}

/// POST /sendEmail, POST /sendSms - Accept any body and report success.
async fn send_notification(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    body: Bytes,
) -> Json<Empty> {
    if state.log_payloads() {
        tracing::info!(
            path = %uri.path(),
            payload = %String::from_utf8_lossy(&body),
            "Notification"
        );
    }
    Json(Empty {})
}
