//! Confluence-backed document source adapter.

use async_trait::async_trait;
use tracing::info;

use confluence_client::{ConfluenceClient, ConfluenceError};

use crate::error::SourceError;
use crate::traits::{Document, DocumentSource};

/// Document source backed by the Confluence REST API.
pub struct ConfluenceSource {
    client: ConfluenceClient,
}

impl ConfluenceSource {
    pub fn new(client: ConfluenceClient) -> Self {
        Self { client }
    }

    /// Build from Confluence environment variables, if all are set.
    pub fn from_env() -> Option<Self> {
        ConfluenceClient::from_env().ok().map(Self::new)
    }
}

#[async_trait]
impl DocumentSource for ConfluenceSource {
    async fn fetch(&self, page_id: &str) -> Result<Document, SourceError> {
        info!(page_id, "Fetching Confluence page");

        let page = self.client.get_page(page_id).await.map_err(|e| match e {
            ConfluenceError::Config(msg) => SourceError::NotConfigured(msg),
            ConfluenceError::Api { status: 404, .. } => SourceError::NotFound {
                page_id: page_id.to_string(),
            },
            other => SourceError::Fetch(other.to_string()),
        })?;

        Ok(Document::new(page.title, page.body))
    }

    fn name(&self) -> &str {
        "confluence"
    }
}
