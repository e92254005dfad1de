//! Trait seams for the two fallible collaborators.
//!
//! Everything else in this crate is a pure function over immutable input;
//! fetching a document and calling the summarization API are the only
//! suspension points. Both sit behind traits so the server can swap in
//! offline mocks when credentials are absent and tests can avoid the
//! network entirely.

use async_trait::async_trait;

use crate::error::{SourceError, SummarizeError};

/// A fetched document, immutable once produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// Document title, may be empty
    pub title: String,
    /// Raw body markup, tags not yet stripped
    pub body: String,
}

impl Document {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Fetches a raw document by page id.
///
/// Implementations make one outbound call with a bounded timeout and no
/// internal retry; a failure is reported upward immediately so the caller
/// can fall back.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn fetch(&self, page_id: &str) -> Result<Document, SourceError>;

    /// Short name for logging.
    fn name(&self) -> &str;
}

/// Generates a summary for an assembled prompt.
///
/// Same transport policy as [`DocumentSource`]: one call, bounded timeout,
/// no retry, errors reported upward as a fallback trigger.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, prompt: &str) -> Result<String, SummarizeError>;

    /// Short name for logging.
    fn name(&self) -> &str;
}
