//! Identity mock - an in-memory stand-in for an identity backend.
//!
//! Looks up, registers and authenticates users, attaches federated provider
//! records, and accepts notification sends without doing anything with them.
//! All state lives in a [`UserStore`] owned by [`AppState`].

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod state;
pub mod store;

use std::sync::Arc;

use axum::{middleware, Router};
use tower_http::cors::CorsLayer;

pub use config::Config;
pub use error::{Error, Result};
pub use state::AppState;
pub use store::{IdGenerator, IdStrategy, LookupField, StoreError, UniqueField, UserStore};

/// Build the full application router over `state`.
pub fn build_app(state: Arc<AppState>) -> Router {
    api::router()
        .layer(middleware::from_fn(logging::request_logger))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
