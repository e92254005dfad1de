use axum::{extract::Extension, Json};
use serde::{Deserialize, Serialize};

use summarizer::Persona;

use crate::server::app::AppState;
use crate::server::error::ApiError;

#[derive(Deserialize)]
pub struct FeedbackRequest {
    pub url: String,
    pub persona: String,
    pub feedback: String,
}

#[derive(Serialize)]
pub struct FeedbackResponse {
    pub message: String,
    pub id: String,
}

/// Record a thumbs-up/down submission.
pub async fn feedback_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<FeedbackRequest>,
) -> Result<Json<FeedbackResponse>, ApiError> {
    request
        .persona
        .parse::<Persona>()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    if request.feedback != "positive" && request.feedback != "negative" {
        return Err(ApiError::BadRequest(format!(
            "지원하지 않는 피드백 값: {}",
            request.feedback
        )));
    }

    let id = state
        .feedback
        .record(&request.url, &request.persona, &request.feedback)
        .await
        .map_err(|e| ApiError::Internal(format!("피드백 저장 실패: {}", e)))?;

    Ok(Json(FeedbackResponse {
        message: "피드백이 저장되었습니다.".to_string(),
        id,
    }))
}
