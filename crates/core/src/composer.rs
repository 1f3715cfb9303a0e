//! Prompt composition: render parameters, call the provider, trim the reply.

use std::sync::Arc;

use crate::error::ProviderError;
use crate::params::{GeneratedPrompt, PromptParameters};
use crate::provider::{CompletionRequest, PromptProvider};
use crate::template::{self, SYSTEM_INSTRUCTION};

/// Stateless composer holding the injected provider.
///
/// Cheap to clone; the provider is shared behind an `Arc`.
#[derive(Clone)]
pub struct PromptComposer {
    provider: Arc<dyn PromptProvider>,
}

impl PromptComposer {
    pub fn new(provider: Arc<dyn PromptProvider>) -> Self {
        Self { provider }
    }

    /// The provider this composer sends requests to.
    pub fn provider(&self) -> &dyn PromptProvider {
        self.provider.as_ref()
    }

    /// Build the request that [`compose`](Self::compose) would submit.
    pub fn build_request(params: &PromptParameters) -> CompletionRequest {
        CompletionRequest {
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            prompt: template::render(params),
        }
    }

    /// Render `params`, make one provider call, and return the trimmed text.
    pub async fn compose(&self, params: &PromptParameters) -> Result<GeneratedPrompt, ProviderError> {
        let request = Self::build_request(params);

        tracing::debug!(
            provider = self.provider.name(),
            model = self.provider.model(),
            keywords = params.keywords.len(),
            references = params.references.len(),
            prompt_len = request.prompt.len(),
            "Composing prompt"
        );

        let text = self.provider.complete(&request).await.inspect_err(|e| {
            tracing::error!(provider = self.provider.name(), error = %e, "Provider call failed");
        })?;

        Ok(GeneratedPrompt {
            optimized_prompt: text.trim().to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
