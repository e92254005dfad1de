//! Pure Anthropic Messages REST API client
//!
//! A clean, minimal client for the Anthropic API with no domain-specific logic.
//! Supports single-turn and multi-turn message completions.
//!
//! # Example
//!
//! ```rust,ignore
//! use anthropic_client::{AnthropicClient, MessageRequest, Message};
//!
//! let client = AnthropicClient::from_env()?;
//!
//! let response = client.create_message(
//!     MessageRequest::new("claude-3-haiku-20240307")
//!         .max_tokens(1000)
//!         .message(Message::user("Summarize this document...")),
//! ).await?;
//!
//! println!("{}", response.content);
//! ```

pub mod error;
pub mod types;

pub use error::{AnthropicError, Result};
pub use types::*;

use reqwest::Client;
use tracing::{debug, warn};

/// API version header required by the Messages endpoint.
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Outbound request timeout in seconds.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Pure Anthropic API client.
#[derive(Clone)]
pub struct AnthropicClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl AnthropicClient {
    /// Create a new Anthropic client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to create HTTP client"),
            api_key: api_key.into(),
            base_url: "https://api.anthropic.com".to_string(),
        }
    }

    /// Create from environment variable `ANTHROPIC_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("ANTHROPIC_API_KEY")
            .map_err(|_| AnthropicError::Config("ANTHROPIC_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for proxies or test servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a message completion.
    ///
    /// Sends the request to the Messages API and returns the text of the
    /// first content block. Fails on network errors, non-success statuses,
    /// and empty responses; no retry is attempted.
    pub async fn create_message(&self, request: MessageRequest) -> Result<MessageResponse> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Anthropic request failed");
                AnthropicError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Anthropic API error");
            return Err(AnthropicError::Api(format!(
                "Anthropic API error: {}",
                error_text
            )));
        }

        let raw: types::MessageResponseRaw = response
            .json()
            .await
            .map_err(|e| AnthropicError::Parse(e.to_string()))?;

        let content = raw
            .content
            .into_iter()
            .find(|block| block.kind == "text")
            .map(|block| block.text)
            .ok_or_else(|| AnthropicError::Api("No text content from Anthropic".into()))?;

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            "Anthropic message completion"
        );

        Ok(MessageResponse {
            content,
            usage: raw.usage,
        })
    }

    /// Single-prompt completion convenience wrapper.
    pub async fn complete(&self, model: &str, prompt: &str, max_tokens: u32) -> Result<String> {
        let request = MessageRequest::new(model)
            .max_tokens(max_tokens)
            .message(Message::user(prompt));

        Ok(self.create_message(request).await?.content)
    }
}
