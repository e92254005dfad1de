//! Pure Confluence REST API client
//!
//! A minimal client for fetching Confluence pages by id, plus helpers for
//! recognizing Confluence page URLs and extracting page ids from them.
//!
//! # Example
//!
//! ```rust,ignore
//! use confluence_client::{extract_page_id, ConfluenceClient};
//!
//! let client = ConfluenceClient::from_env()?;
//!
//! if let Some(page_id) = extract_page_id(&url) {
//!     let page = client.get_page(&page_id).await?;
//!     println!("{}: {} bytes of storage markup", page.title, page.body.len());
//! }
//! ```

pub mod error;
pub mod types;
pub mod urls;

pub use error::{ConfluenceError, Result};
pub use types::{Page, PageResponseRaw};
pub use urls::{extract_page_id, is_confluence_url};

use reqwest::Client;
use tracing::{debug, warn};

/// Outbound request timeout in seconds.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Pure Confluence API client.
#[derive(Clone)]
pub struct ConfluenceClient {
    http_client: Client,
    base_url: String,
    username: String,
    api_token: String,
}

impl ConfluenceClient {
    /// Create a new client for the given site with Basic-auth credentials.
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Self {
        Self {
            http_client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into(),
            username: username.into(),
            api_token: api_token.into(),
        }
    }

    /// Create from `CONFLUENCE_BASE_URL`, `CONFLUENCE_USERNAME`, and
    /// `CONFLUENCE_API_TOKEN` environment variables.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("CONFLUENCE_BASE_URL")
            .map_err(|_| ConfluenceError::Config("CONFLUENCE_BASE_URL not set".into()))?;
        let username = std::env::var("CONFLUENCE_USERNAME")
            .map_err(|_| ConfluenceError::Config("CONFLUENCE_USERNAME not set".into()))?;
        let api_token = std::env::var("CONFLUENCE_API_TOKEN")
            .map_err(|_| ConfluenceError::Config("CONFLUENCE_API_TOKEN not set".into()))?;

        Ok(Self::new(base_url, username, api_token))
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a page by id, expanding the storage-format body.
    ///
    /// Calls `GET {base}/rest/api/content/{id}?expand=body.storage` with
    /// Basic auth. Fails on network errors and non-success statuses; no
    /// retry is attempted.
    pub async fn get_page(&self, page_id: &str) -> Result<Page> {
        let api_url = format!(
            "{}/rest/api/content/{}?expand=body.storage",
            self.base_url.trim_end_matches('/'),
            page_id
        );
        debug!(page_id = %page_id, "Confluence page fetch starting");

        let response = self
            .http_client
            .get(&api_url)
            .basic_auth(&self.username, Some(&self.api_token))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                warn!(page_id = %page_id, error = %e, "Confluence request failed");
                ConfluenceError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            match status.as_u16() {
                401 => warn!(page_id = %page_id, "Confluence authentication failed"),
                404 => warn!(page_id = %page_id, "Confluence page not found"),
                code => warn!(page_id = %page_id, status = code, "Confluence API error"),
            }
            return Err(ConfluenceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let raw: PageResponseRaw = response
            .json()
            .await
            .map_err(|e| ConfluenceError::Parse(e.to_string()))?;

        let body = raw
            .body
            .and_then(|body| body.storage)
            .map(|storage| storage.value)
            .unwrap_or_default();

        debug!(
            page_id = %page_id,
            title = %raw.title,
            body_length = body.len(),
            "Confluence page fetched"
        );

        Ok(Page {
            id: raw.id.unwrap_or_else(|| page_id.to_string()),
            title: raw.title,
            body,
        })
    }
}
