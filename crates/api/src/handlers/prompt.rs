//! Handlers for the landing page and prompt generation.

use std::time::Duration;

use axum::extract::State;
use axum::Json;

use composer_core::params::{GeneratedPrompt, PromptParameters};

use crate::error::{AppError, AppResult};
use crate::middleware::json::ValidatedJson;
use crate::state::AppState;

/// Body returned by `GET /`.
pub const LANDING_MESSAGE: &str = "Welcome to landing page";

/// GET /
///
/// Returned as a JSON string literal.
pub async fn landing() -> Json<&'static str> {
    Json(LANDING_MESSAGE)
}

/// POST /generate_prompt
///
/// The body is fully validated by [`ValidatedJson`] before this runs, so a
/// malformed request never reaches the provider. The provider call is cut
/// off after `request_timeout_secs`.
pub async fn generate_prompt(
    State(state): State<AppState>,
    ValidatedJson(params): ValidatedJson<PromptParameters>,
) -> AppResult<Json<GeneratedPrompt>> {
    let limit = state.config.request_timeout_secs;
    let generated = tokio::time::timeout(
        Duration::from_secs(limit),
        state.composer.compose(&params),
    )
    .await
    .map_err(|_| AppError::Timeout(limit))??;

    tracing::info!(
        provider = state.composer.provider().name(),
        prompt_len = generated.optimized_prompt.len(),
        "Prompt generated"
    );

    Ok(Json(generated))
}
