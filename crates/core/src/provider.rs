//! The seam between prompt composition and a generative-text backend.

use async_trait::async_trait;

use crate::error::ProviderError;

/// A single-turn completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    /// System-role instruction framing the task.
    pub system_instruction: String,
    /// User-role content.
    pub prompt: String,
}

/// A generative-text service that turns an instruction block into text.
///
/// Implementations perform exactly one upstream call per [`complete`]
/// invocation and never retry.
///
/// [`complete`]: PromptProvider::complete
#[async_trait]
pub trait PromptProvider: Send + Sync {
    /// Short provider name for logs and health output.
    fn name(&self) -> &str;

    /// Model identifier requests are sent to.
    fn model(&self) -> &str;

    /// Submit `request` and return the raw text of the reply.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ProviderError>;
}
