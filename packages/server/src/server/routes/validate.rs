use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use confluence_client::{extract_page_id, is_confluence_url};

use crate::sample::SAMPLE_TITLE;

/// Page id assumed when a recognized Confluence URL carries none.
const DEFAULT_PAGE_ID: &str = "123456";

#[derive(Deserialize)]
pub struct ValidateUrlRequest {
    pub url: String,
}

#[derive(Serialize)]
pub struct ValidateUrlResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub message: String,
}

/// Validate that a URL looks like a Confluence page.
///
/// Format-only check; no network call is made, so the title is a
/// placeholder until the summarize step fetches the real page.
pub async fn validate_url_handler(
    Json(request): Json<ValidateUrlRequest>,
) -> Json<ValidateUrlResponse> {
    if !is_confluence_url(&request.url) {
        info!(url = %request.url, "Rejected non-Confluence URL");
        return Json(ValidateUrlResponse {
            valid: false,
            title: None,
            message: "올바른 Confluence URL 형식이 아닙니다.".to_string(),
        });
    }

    let page_id =
        extract_page_id(&request.url).unwrap_or_else(|| DEFAULT_PAGE_ID.to_string());
    info!(url = %request.url, page_id = %page_id, "URL validated");

    Json(ValidateUrlResponse {
        valid: true,
        title: Some(SAMPLE_TITLE.to_string()),
        message: "유효한 Confluence 문서입니다.".to_string(),
    })
}
