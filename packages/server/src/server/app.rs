//! Application setup and router construction.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use summarizer::{AnthropicSummarizer, ConfluenceSource, DocumentSource, Summarizer};

use crate::config::Config;
use crate::feedback::FeedbackStore;
use crate::server::routes::{
    feedback_handler, health_handler, stats_handler, summarize_handler, validate_url_handler,
};

/// Request timeout, matching the outbound AI call timeout.
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// AI summarizer; `None` means serve deterministic offline summaries.
    pub summarizer: Option<Arc<dyn Summarizer>>,
    /// Document source; `None` means serve the built-in sample document.
    pub source: Option<Arc<dyn DocumentSource>>,
    pub feedback: Arc<FeedbackStore>,
}

impl AppState {
    /// Wire up providers from configuration. Either provider may be absent;
    /// the routes degrade gracefully without them.
    pub fn from_config(config: &Config) -> Self {
        let summarizer = AnthropicSummarizer::from_env(config.anthropic_model.clone())
            .map(|s| Arc::new(s) as Arc<dyn Summarizer>);
        match &summarizer {
            Some(_) => info!(model = %config.anthropic_model, "Anthropic summarizer configured"),
            None => info!("ANTHROPIC_API_KEY not set, serving offline summaries"),
        }

        let source = ConfluenceSource::from_env().map(|s| Arc::new(s) as Arc<dyn DocumentSource>);
        match &source {
            Some(_) => info!("Confluence source configured"),
            None => info!("Confluence credentials not set, serving sample document"),
        }

        Self {
            summarizer,
            source,
            feedback: Arc::new(FeedbackStore::open(&config.feedback_file)),
        }
    }
}

/// Build the Axum application router
pub fn build_app(state: AppState) -> Router {
    // Permissive CORS for the MVP frontend
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/validate-url", post(validate_url_handler))
        .route("/api/summarize", post(summarize_handler))
        .route("/api/feedback", post(feedback_handler))
        .route("/api/stats", get(stats_handler))
        .layer(Extension(state))
        .layer(TimeoutLayer::new(Duration::from_secs(REQUEST_TIMEOUT_SECS)))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
