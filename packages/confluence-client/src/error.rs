//! Error types for the Confluence client.

use thiserror::Error;

/// Result type for Confluence client operations.
pub type Result<T> = std::result::Result<T, ConfluenceError>;

/// Confluence client errors.
#[derive(Debug, Error)]
pub enum ConfluenceError {
    /// Configuration error (missing base URL or credentials)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// API error (non-2xx response)
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(String),
}
