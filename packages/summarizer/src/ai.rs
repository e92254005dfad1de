//! Anthropic-backed summarizer adapter.

use async_trait::async_trait;
use tracing::info;

use anthropic_client::{AnthropicClient, AnthropicError};

use crate::error::SummarizeError;
use crate::traits::Summarizer;

/// Maximum tokens requested per summary completion.
const SUMMARY_MAX_TOKENS: u32 = 1000;

/// Summarizer backed by the Anthropic Messages API.
pub struct AnthropicSummarizer {
    client: AnthropicClient,
    model: String,
}

impl AnthropicSummarizer {
    pub fn new(client: AnthropicClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Build from `ANTHROPIC_API_KEY`, if set. Returns `None` when the key
    /// is absent so callers can fall back to offline summaries.
    pub fn from_env(model: impl Into<String>) -> Option<Self> {
        AnthropicClient::from_env()
            .ok()
            .map(|client| Self::new(client, model))
    }
}

#[async_trait]
impl Summarizer for AnthropicSummarizer {
    async fn summarize(&self, prompt: &str) -> Result<String, SummarizeError> {
        info!(model = %self.model, prompt_chars = prompt.len(), "Requesting summary");

        self.client
            .complete(&self.model, prompt, SUMMARY_MAX_TOKENS)
            .await
            .map_err(|e| match e {
                AnthropicError::Config(msg) => SummarizeError::Unavailable(msg),
                other => SummarizeError::Failed(other.to_string()),
            })
    }

    fn name(&self) -> &str {
        "anthropic"
    }
}
