use axum::{extract::Extension, Json};

use crate::feedback::FeedbackStats;
use crate::server::app::AppState;

/// Aggregate feedback statistics, for development dashboards.
pub async fn stats_handler(Extension(state): Extension<AppState>) -> Json<FeedbackStats> {
    Json(state.feedback.stats().await)
}
