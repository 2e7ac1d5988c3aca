//! Axum route handlers for the Interviews API.

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::errors::AppError;
use crate::interviews::catalog::{templates, InterviewTemplate};
use crate::interviews::covers::random_cover;
use crate::interviews::generator::generate_interview;
use crate::interviews::questions::{
    deserialize_amount, LlmQuestionSource, QuestionRequest, TemplateQuestionSource,
};
use crate::interviews::seeding::{seed_interviews, start_interview};
use crate::models::interview::Interview;
use crate::session::current_user;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedRequest {
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedResponse {
    pub success: bool,
    pub count: usize,
    pub user_id: String,
    pub message: String,
}

/// Body sent by the voice workflow.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(rename = "type")]
    pub interview_type: String,
    pub role: String,
    pub level: String,
    pub techstack: String,
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount: u32,
    pub userid: String,
}

impl GenerateRequest {
    fn into_parts(self) -> (QuestionRequest, String) {
        (
            QuestionRequest {
                role: self.role,
                level: self.level,
                techstack: self.techstack,
                interview_type: self.interview_type,
                amount: self.amount,
            },
            self.userid,
        )
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub success: bool,
    pub interview_id: Uuid,
    pub used_fallback: bool,
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartInterviewRequest {
    pub template_index: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartInterviewResponse {
    pub success: bool,
    pub interview_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct FeedQuery {
    pub limit: Option<u32>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/seed
///
/// Creates one interview per catalog template for the user named in the body,
/// or for the signed-in user when the body has none. A missing or malformed body
/// counts as empty.
pub async fn handle_seed(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<SeedResponse>, AppError> {
    let request: SeedRequest = serde_json::from_slice(&body).unwrap_or_default();

    let user_id = match request.user_id.filter(|id| !id.trim().is_empty()) {
        Some(user_id) => user_id,
        None => current_user(state.sessions.as_ref(), &headers)
            .await
            .map_err(|e| AppError::dependency("Failed to seed interviews", e))?
            .ok_or_else(|| {
                AppError::Validation(
                    "User ID is required. Please provide userId in request body or be logged in."
                        .to_string(),
                )
            })?,
    };

    let count = seed_interviews(state.store.as_ref(), &user_id, &state.config.cover_base_url)
        .await
        .map_err(|e| AppError::store("Failed to seed interviews", e))?;

    Ok(Json(SeedResponse {
        success: true,
        count,
        message: format!("Successfully seeded {count} interviews for user {user_id}"),
        user_id,
    }))
}

/// POST /api/vapi/generate
///
/// 200 whether the questions came from the provider or the templates; 500 only
/// when the interview cannot be saved.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let (question_request, user_id) = request.into_parts();
    let source = LlmQuestionSource::new(state.llm.clone());

    let generated = generate_interview(
        state.store.as_ref(),
        &source,
        &TemplateQuestionSource,
        &question_request,
        &user_id,
        random_cover(&state.config.cover_base_url),
    )
    .await
    .map_err(|e| AppError::store("Failed to save interview", e))?;

    let message = if generated.used_fallback {
        "Interview created with curated questions (AI unavailable)"
    } else {
        "Interview created successfully"
    };

    Ok(Json(GenerateResponse {
        success: true,
        interview_id: generated.interview_id,
        used_fallback: generated.used_fallback,
        message: message.to_string(),
    }))
}

/// GET /api/vapi/generate
pub async fn handle_generate_health() -> Json<Value> {
    Json(json!({ "success": true, "data": "Thank you!" }))
}

/// GET /api/templates
pub async fn handle_list_templates() -> Json<&'static [InterviewTemplate]> {
    Json(templates())
}

/// POST /api/interviews
///
/// Starts an interview for the signed-in user from a catalog template.
pub async fn handle_start_interview(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<StartInterviewRequest>,
) -> Result<(StatusCode, Json<StartInterviewResponse>), AppError> {
    let user_id = current_user(state.sessions.as_ref(), &headers)
        .await?
        .ok_or(AppError::Unauthorized)?;

    let template = templates().get(request.template_index).ok_or_else(|| {
        AppError::NotFound(format!("Template {} not found", request.template_index))
    })?;

    let interview_id = start_interview(
        state.store.as_ref(),
        template,
        &user_id,
        &state.config.cover_base_url,
    )
    .await
    .map_err(|e| AppError::store("Failed to start interview", e))?;

    Ok((
        StatusCode::CREATED,
        Json(StartInterviewResponse {
            success: true,
            interview_id,
        }),
    ))
}

/// GET /api/interviews/:id
pub async fn handle_get_interview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Interview>, AppError> {
    state
        .store
        .get_interview(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Interview {id} not found")))
}

/// GET /api/users/:user_id/interviews
///
/// Newest first; interviews without a creation time come last.
pub async fn handle_user_interviews(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Interview>>, AppError> {
    Ok(Json(state.store.interviews_by_user(&user_id).await?))
}

/// GET /api/interviews?limit=N
pub async fn handle_feed(
    State(state): State<AppState>,
    Query(query): Query<FeedQuery>,
) -> Result<Json<Vec<Interview>>, AppError> {
    let limit = query.limit.unwrap_or(state.config.feed_limit);
    Ok(Json(state.store.finalized_feed(limit).await?))
}
