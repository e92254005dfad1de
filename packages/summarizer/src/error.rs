//! Typed errors for the summarizer library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling. Malformed input data never
//! produces an error here: URL and markup parsing degrade gracefully, and
//! the only hard failure is an unrecognized persona key.

use thiserror::Error;

/// The persona key is outside the closed set of four.
///
/// This is the sole client-facing failure of the core pipeline; every
/// other malformed input falls back to a best-effort structure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("지원하지 않는 페르소나: {0}")]
pub struct UnknownPersonaError(pub String);

/// Errors reported by a document source adapter.
#[derive(Debug, Error)]
pub enum SourceError {
    /// No source is configured (missing base URL or credentials)
    #[error("document source not configured: {0}")]
    NotConfigured(String),

    /// The document does not exist or is not accessible
    #[error("document not found: {page_id}")]
    NotFound { page_id: String },

    /// Transport or API failure
    #[error("document fetch failed: {0}")]
    Fetch(String),
}

/// Errors reported by a summarization adapter.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// The adapter cannot run at all (missing credentials)
    #[error("summarization unavailable: {0}")]
    Unavailable(String),

    /// The call was made but failed (timeout, non-success status)
    #[error("summarization failed: {0}")]
    Failed(String),
}
