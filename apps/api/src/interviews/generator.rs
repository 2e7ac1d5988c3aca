//! Interview generation: acquire questions, then persist one finalized interview.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::interviews::questions::{acquire_questions, QuestionRequest, QuestionSource};
use crate::models::interview::{split_techstack, NewInterview};
use crate::store::{RecordStore, StoreError};

/// Outcome of a successful generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedInterview {
    pub interview_id: Uuid,
    pub used_fallback: bool,
}

/// Acquires questions (`primary` first, `fallback` on failure) and writes exactly
/// one finalized interview. Only the write can fail.
pub async fn generate_interview(
    store: &dyn RecordStore,
    primary: &dyn QuestionSource,
    fallback: &dyn QuestionSource,
    request: &QuestionRequest,
    user_id: &str,
    cover_image: String,
) -> Result<GeneratedInterview, StoreError> {
    let acquired = acquire_questions(primary, fallback, request).await;
    let used_fallback = acquired.used_fallback();
    let question_count = acquired.questions.len();

    let interview = NewInterview {
        role: request.role.clone(),
        level: request.level.clone(),
        interview_type: request.interview_type.clone(),
        techstack: split_techstack(&request.techstack),
        duration: None,
        description: None,
        job_description: None,
        user_id: user_id.to_string(),
        cover_image,
        created_at: Some(Utc::now()),
        finalized: true,
        questions: acquired.questions,
        generated_by: Some(acquired.generated_by),
    };

    let interview_id = store.create_interview(interview).await?;

    info!(
        "Generated interview {} for user {} ({} questions, source={})",
        interview_id,
        user_id,
        question_count,
        acquired.generated_by.as_str()
    );

    Ok(GeneratedInterview {
        interview_id,
        used_fallback,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::interviews::questions::{LlmQuestionSource, TemplateQuestionSource};
    use crate::llm_client::testing::StubLlm;
    use crate::models::interview::GeneratedBy;
    use crate::store::MemoryRecordStore;

    fn request() -> QuestionRequest {
        QuestionRequest {
            role: "Mobile Developer".to_string(),
            level: "entry".to_string(),
            techstack: "Flutter, Dart".to_string(),
            interview_type: "Mixed".to_string(),
            amount: 4,
        }
    }

    #[tokio::test]
    async fn test_generate_persists_finalized_ai_interview() {
        let store = MemoryRecordStore::new();
        let source = LlmQuestionSource::new(Arc::new(StubLlm::replying(
            r#"["A", "B", "C", "D"]"#,
        )));

        let generated = generate_interview(
            &store,
            &source,
            &TemplateQuestionSource,
            &request(),
            "user-1",
            "/covers/tiktok.png".to_string(),
        )
        .await
        .unwrap();

        assert!(!generated.used_fallback);
        assert_eq!(store.interview_count().await, 1);
        let stored = store
            .get_interview(generated.interview_id)
            .await
            .unwrap()
            .unwrap();
        assert!(stored.fields.finalized);
        assert_eq!(stored.fields.questions, vec!["A", "B", "C", "D"]);
        assert_eq!(stored.fields.techstack, vec!["Flutter", "Dart"]);
        assert_eq!(stored.fields.generated_by, Some(GeneratedBy::Ai));
        assert!(stored.fields.created_at.is_some());
    }

    #[tokio::test]
    async fn test_generate_records_fallback() {
        let store = MemoryRecordStore::new();
        let source = LlmQuestionSource::new(Arc::new(StubLlm::failing(503, "overloaded")));

        let generated = generate_interview(
            &store,
            &source,
            &TemplateQuestionSource,
            &request(),
            "user-1",
            "/covers/tiktok.png".to_string(),
        )
        .await
        .unwrap();

        assert!(generated.used_fallback);
        let stored = store
            .get_interview(generated.interview_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.fields.generated_by, Some(GeneratedBy::Fallback));
        assert_eq!(stored.fields.questions.len(), 4);
    }

    #[tokio::test]
    async fn test_generate_surfaces_storage_failure() {
        let store = MemoryRecordStore::new();
        store.set_unavailable(true);
        let source = LlmQuestionSource::new(Arc::new(StubLlm::replying(r#"["A"]"#)));

        let result = generate_interview(
            &store,
            &source,
            &TemplateQuestionSource,
            &request(),
            "user-1",
            "/covers/tiktok.png".to_string(),
        )
        .await;

        assert!(matches!(result, Err(StoreError::Unavailable(_))));
    }
}
