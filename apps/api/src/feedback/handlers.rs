//! Axum route handlers for the Feedback API.

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::warn;
use uuid::Uuid;

use crate::errors::AppError;
use crate::feedback::scoring::{create_feedback, CreateFeedbackOutcome, CreateFeedbackParams};
use crate::models::feedback::{Feedback, TranscriptMessage};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeedbackRequest {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub transcript: Vec<TranscriptMessage>,
    pub feedback_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackQuery {
    pub user_id: String,
}

/// POST /api/interviews/:id/feedback
///
/// Always 200; `success` tells whether feedback was scored and saved. A body
/// that does not parse, or has no `userId`, is a failed attempt.
pub async fn handle_create_feedback(
    State(state): State<AppState>,
    Path(interview_id): Path<Uuid>,
    body: Bytes,
) -> Json<CreateFeedbackOutcome> {
    let request: CreateFeedbackRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            warn!("Rejected feedback request for interview {interview_id}: {e}");
            return Json(CreateFeedbackOutcome::failed());
        }
    };
    if request.user_id.trim().is_empty() {
        warn!("Feedback request for interview {interview_id} has no userId");
        return Json(CreateFeedbackOutcome::failed());
    }

    let params = CreateFeedbackParams {
        interview_id,
        user_id: request.user_id,
        transcript: request.transcript,
        feedback_id: request.feedback_id,
    };

    Json(create_feedback(state.store.as_ref(), state.llm.as_ref(), params).await)
}

/// GET /api/interviews/:id/feedback?userId=...
pub async fn handle_get_feedback(
    State(state): State<AppState>,
    Path(interview_id): Path<Uuid>,
    Query(query): Query<FeedbackQuery>,
) -> Result<Json<Feedback>, AppError> {
    state
        .store
        .feedback_for(interview_id, &query.user_id)
        .await?
        .map(Json)
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "No feedback for interview {interview_id} and user {}",
                query.user_id
            ))
        })
}
