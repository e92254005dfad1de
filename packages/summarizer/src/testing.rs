//! Testing utilities including mock implementations.
//!
//! Useful for testing applications that use the summarizer library without
//! making real AI or network calls.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::{SourceError, SummarizeError};
use crate::traits::{Document, DocumentSource, Summarizer};

/// A mock document source with preloaded pages.
///
/// Returns the configured document for a page id and `NotFound` for
/// everything else. Calls are recorded for assertions.
#[derive(Default)]
pub struct MockDocumentSource {
    pages: Arc<RwLock<HashMap<String, Document>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockDocumentSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preload a document for a page id.
    pub fn with_page(self, page_id: impl Into<String>, document: Document) -> Self {
        self.pages
            .write()
            .unwrap()
            .insert(page_id.into(), document);
        self
    }

    /// Page ids fetched so far, in call order.
    pub fn fetched_ids(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl DocumentSource for MockDocumentSource {
    async fn fetch(&self, page_id: &str) -> Result<Document, SourceError> {
        self.calls.write().unwrap().push(page_id.to_string());

        self.pages
            .read()
            .unwrap()
            .get(page_id)
            .cloned()
            .ok_or_else(|| SourceError::NotFound {
                page_id: page_id.to_string(),
            })
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Behavior of [`MockSummarizer`].
enum MockSummarizerMode {
    /// Return a fixed response
    Fixed(String),
    /// Return the prompt itself, so tests can inspect assembly
    Echo,
    /// Fail every call, so tests can exercise the offline fallback
    Failing,
}

/// A mock summarizer with deterministic behavior.
pub struct MockSummarizer {
    mode: MockSummarizerMode,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockSummarizer {
    /// Always return the given text.
    pub fn fixed(response: impl Into<String>) -> Self {
        Self {
            mode: MockSummarizerMode::Fixed(response.into()),
            calls: Arc::default(),
        }
    }

    /// Return each prompt unchanged.
    pub fn echo() -> Self {
        Self {
            mode: MockSummarizerMode::Echo,
            calls: Arc::default(),
        }
    }

    /// Fail every call with `SummarizeError::Failed`.
    pub fn failing() -> Self {
        Self {
            mode: MockSummarizerMode::Failing,
            calls: Arc::default(),
        }
    }

    /// Prompts submitted so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl Summarizer for MockSummarizer {
    async fn summarize(&self, prompt: &str) -> Result<String, SummarizeError> {
        self.calls.write().unwrap().push(prompt.to_string());

        match &self.mode {
            MockSummarizerMode::Fixed(response) => Ok(response.clone()),
            MockSummarizerMode::Echo => Ok(prompt.to_string()),
            MockSummarizerMode::Failing => {
                Err(SummarizeError::Failed("mock failure".to_string()))
            }
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_source_returns_preloaded_page() {
        let source = MockDocumentSource::new()
            .with_page("123", Document::new("Title", "# Body"));

        let document = source.fetch("123").await.unwrap();
        assert_eq!(document.title, "Title");
        assert_eq!(source.fetched_ids(), vec!["123"]);
    }

    #[tokio::test]
    async fn test_mock_source_missing_page() {
        let source = MockDocumentSource::new();
        let err = source.fetch("999").await.unwrap_err();
        assert!(matches!(err, SourceError::NotFound { page_id } if page_id == "999"));
    }

    #[tokio::test]
    async fn test_mock_summarizer_modes() {
        assert_eq!(
            MockSummarizer::fixed("ok").summarize("p").await.unwrap(),
            "ok"
        );
        assert_eq!(
            MockSummarizer::echo().summarize("the prompt").await.unwrap(),
            "the prompt"
        );
        assert!(MockSummarizer::failing().summarize("p").await.is_err());
    }
}
