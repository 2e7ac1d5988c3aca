//! Feedback Scoring: turns a transcript into a scored, persisted evaluation.
//!
//! There is no local fallback: a provider error or an evaluation that fails the
//! schema yields `success = false` and nothing is written.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::feedback::prompts::{FEEDBACK_PROMPT_TEMPLATE, FEEDBACK_SYSTEM};
use crate::llm_client::{complete_json, LlmError, LlmProvider};
use crate::models::feedback::{CategoryScores, NewFeedback, TranscriptMessage, MAX_SCORE};
use crate::store::RecordStore;

/// The structured object the provider must return.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackEvaluation {
    pub total_score: u8,
    pub category_scores: CategoryScores,
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub final_assessment: String,
}

impl FeedbackEvaluation {
    /// Range checks the type system cannot express.
    pub fn validate(&self) -> Result<(), LlmError> {
        if self.total_score > MAX_SCORE {
            return Err(LlmError::Invalid(format!(
                "totalScore {} exceeds {MAX_SCORE}",
                self.total_score
            )));
        }
        let out_of_range = self.category_scores.out_of_range();
        if !out_of_range.is_empty() {
            return Err(LlmError::Invalid(format!(
                "category scores exceed {MAX_SCORE}: {}",
                out_of_range.join(", ")
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CreateFeedbackParams {
    pub interview_id: Uuid,
    pub user_id: String,
    pub transcript: Vec<TranscriptMessage>,
    pub feedback_id: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeedbackOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback_id: Option<Uuid>,
}

impl CreateFeedbackOutcome {
    pub fn failed() -> Self {
        Self {
            success: false,
            feedback_id: None,
        }
    }
}

/// One `- role: content` line per message, in conversation order.
pub fn format_transcript(transcript: &[TranscriptMessage]) -> String {
    transcript
        .iter()
        .map(|m| format!("- {}: {}\n", m.role, m.content))
        .collect()
}

/// Asks the provider for a schema-conforming evaluation of `transcript`.
pub async fn evaluate_transcript(
    llm: &dyn LlmProvider,
    transcript: &[TranscriptMessage],
) -> Result<FeedbackEvaluation, LlmError> {
    let prompt = FEEDBACK_PROMPT_TEMPLATE.replace("{transcript}", &format_transcript(transcript));
    let evaluation: FeedbackEvaluation = complete_json(llm, &prompt, FEEDBACK_SYSTEM).await?;
    evaluation.validate()?;
    Ok(evaluation)
}

/// Scores a transcript and writes the feedback record.
///
/// With `feedback_id` the existing record is overwritten, otherwise a new id is
/// allocated. Two concurrent calls without an id for the same interview/user can
/// both succeed and leave two records.
pub async fn create_feedback(
    store: &dyn RecordStore,
    llm: &dyn LlmProvider,
    params: CreateFeedbackParams,
) -> CreateFeedbackOutcome {
    if params.transcript.is_empty() {
        info!(
            "No transcript for interview {}; nothing to score",
            params.interview_id
        );
        return CreateFeedbackOutcome::failed();
    }

    let evaluation = match evaluate_transcript(llm, &params.transcript).await {
        Ok(evaluation) => evaluation,
        Err(e) => {
            warn!(
                "Feedback evaluation failed for interview {}: {e}",
                params.interview_id
            );
            return CreateFeedbackOutcome::failed();
        }
    };

    let feedback = NewFeedback {
        interview_id: params.interview_id,
        user_id: params.user_id,
        total_score: evaluation.total_score,
        category_scores: evaluation.category_scores,
        strengths: evaluation.strengths,
        areas_for_improvement: evaluation.areas_for_improvement,
        final_assessment: evaluation.final_assessment,
        created_at: Utc::now(),
    };

    match store.save_feedback(params.feedback_id, feedback).await {
        Ok(feedback_id) => CreateFeedbackOutcome {
            success: true,
            feedback_id: Some(feedback_id),
        },
        Err(e) => {
            error!(
                "Failed to save feedback for interview {}: {e}",
                params.interview_id
            );
            CreateFeedbackOutcome::failed()
        }
    }
}
