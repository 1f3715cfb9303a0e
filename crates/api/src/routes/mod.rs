pub mod health;
pub mod prompt;

use axum::Router;

use crate::state::AppState;

/// Build the public route tree.
///
/// ```text
/// /                   landing page (GET)
/// /generate_prompt    compose a prompt (POST)
/// /health             service health (GET)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(prompt::router())
        .merge(health::router())
}
