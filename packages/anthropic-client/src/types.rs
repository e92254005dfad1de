//! Anthropic Messages API request and response types.

use serde::{Deserialize, Serialize};

/// Default model for summarization (fast and cost-effective).
pub const DEFAULT_MODEL: &str = "claude-3-haiku-20240307";

/// Messages API request.
#[derive(Debug, Clone, Serialize)]
pub struct MessageRequest {
    /// Model to use (e.g., "claude-3-haiku-20240307")
    pub model: String,

    /// Maximum tokens in the completion
    pub max_tokens: u32,

    /// Conversation messages
    pub messages: Vec<Message>,
}

impl Default for MessageRequest {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: 1000,
            messages: Vec::new(),
        }
    }
}

impl MessageRequest {
    /// Create a new request with the given model.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }

    /// Add a message to the conversation.
    pub fn message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    /// Set max tokens.
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// Chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Role: "user" or "assistant"
    pub role: String,

    /// Message content
    pub content: String,
}

impl Message {
    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// Raw Messages API response.
#[derive(Debug, Deserialize)]
pub struct MessageResponseRaw {
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

/// A single content block in the response.
#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub text: String,
}

/// Token usage accounting.
#[derive(Debug, Clone, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// Simplified message response.
#[derive(Debug)]
pub struct MessageResponse {
    /// Text of the first content block
    pub content: String,
    /// Token usage, when reported
    pub usage: Option<Usage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let request = MessageRequest::new("claude-3-haiku-20240307")
            .max_tokens(500)
            .message(Message::user("Hello"));

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "claude-3-haiku-20240307");
        assert_eq!(json["max_tokens"], 500);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "Hello");
    }

    #[test]
    fn test_response_deserialization() {
        let raw = r#"{
            "content": [{"type": "text", "text": "A summary."}],
            "usage": {"input_tokens": 10, "output_tokens": 5}
        }"#;

        let response: MessageResponseRaw = serde_json::from_str(raw).unwrap();
        assert_eq!(response.content[0].kind, "text");
        assert_eq!(response.content[0].text, "A summary.");
        assert_eq!(response.usage.unwrap().output_tokens, 5);
    }
}
