use std::sync::Arc;

use composer_core::composer::PromptComposer;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Prompt composer wrapping the injected provider.
    pub composer: PromptComposer,
}
