//! Thin HTTP plumbing around the platen compiler.
//!
//! One render endpoint and one health endpoint; no persisted state. Compile
//! errors map to client errors, delegate failures to server errors; the
//! compiler itself knows nothing about HTTP.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

use axum::{
    Router,
    routing::{get, post},
};
use state::AppState;
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/render", post(api::render))
        .route("/health", get(api::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
