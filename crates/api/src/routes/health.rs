use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Name of the configured provider.
    pub provider: String,
    /// Model identifier requests are sent to.
    pub model: String,
}

/// GET /health -- reports the service version and configured provider.
///
/// Does not contact the provider.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let provider = state.composer.provider();

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        provider: provider.name().to_string(),
        model: provider.model().to_string(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
