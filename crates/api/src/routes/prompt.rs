use axum::routing::{get, post};
use axum::Router;

use crate::handlers::prompt;
use crate::state::AppState;

/// Routes for the landing page and prompt generation.
///
/// ```text
/// GET  /                  landing
/// POST /generate_prompt   generate_prompt
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(prompt::landing))
        .route("/generate_prompt", post(prompt::generate_prompt))
}
