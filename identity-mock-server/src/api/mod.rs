//! Identity service HTTP API.

pub mod authenticate;
pub mod health;
pub mod notify;
pub mod provider;
pub mod user;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// Build the API router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(user::router())
        .merge(authenticate::router())
        .merge(provider::router())
        .merge(notify::router())
        .route("/health", get(health::health))
}
