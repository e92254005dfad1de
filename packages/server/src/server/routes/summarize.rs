use axum::{extract::Extension, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use confluence_client::extract_page_id;
use summarizer::{normalize, offline_summary, outline, prompts, Document, Persona};

use crate::sample::{SAMPLE_BODY, SAMPLE_TITLE};
use crate::server::app::AppState;
use crate::server::error::ApiError;

#[derive(Deserialize)]
pub struct SummarizeRequest {
    pub url: String,
    pub persona: String,
}

#[derive(Serialize)]
pub struct SummarizeResponse {
    pub summary: String,
    pub title: String,
    pub url: String,
    pub persona: String,
}

/// Generate a persona-tailored summary for a Confluence page.
///
/// The persona key is the only hard failure; everything downstream fails
/// open. An unreachable page falls back to the sample document and an
/// unavailable AI backend falls back to a fixed offline summary.
pub async fn summarize_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, ApiError> {
    let persona: Persona = request
        .persona
        .parse()
        .map_err(|e: summarizer::UnknownPersonaError| ApiError::BadRequest(e.to_string()))?;

    let document = fetch_document(&state, &request.url).await;

    let flat = normalize::normalize(&document.body);
    let parsed = outline::segment(&normalize::normalize_lines(&document.body));
    info!(
        persona = persona.as_str(),
        title = %document.title,
        sections = parsed.sections.len(),
        "Document parsed"
    );

    let prompt = prompts::assemble_for(persona, &document.title, &flat, Some(&parsed));
    let summary = generate_summary(&state, persona, &document.title, &prompt).await;

    Ok(Json(SummarizeResponse {
        summary,
        title: document.title,
        url: request.url,
        persona: request.persona,
    }))
}

/// Fetch the page behind the URL, falling back to the sample document when
/// no source is configured, the URL carries no page id, or the fetch fails.
async fn fetch_document(state: &AppState, url: &str) -> Document {
    let source = match &state.source {
        Some(source) => source,
        None => return sample_document(),
    };

    let page_id = match extract_page_id(url) {
        Some(page_id) => page_id,
        None => {
            warn!(url, "No page id in URL, using sample document");
            return sample_document();
        }
    };

    match source.fetch(&page_id).await {
        Ok(document) => document,
        Err(e) => {
            warn!(source = source.name(), page_id = %page_id, error = %e, "Fetch failed, using sample document");
            sample_document()
        }
    }
}

/// Run the summarizer, falling back to the fixed offline summary when it is
/// absent or fails.
async fn generate_summary(state: &AppState, persona: Persona, title: &str, prompt: &str) -> String {
    let summarizer = match &state.summarizer {
        Some(summarizer) => summarizer,
        None => return offline_summary(persona, title),
    };

    match summarizer.summarize(prompt).await {
        Ok(summary) => summary,
        Err(e) => {
            warn!(summarizer = summarizer.name(), error = %e, "Summarization failed, using offline summary");
            offline_summary(persona, title)
        }
    }
}

fn sample_document() -> Document {
    Document::new(SAMPLE_TITLE, SAMPLE_BODY)
}
