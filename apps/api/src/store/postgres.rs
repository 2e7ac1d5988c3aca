use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgExecutor, PgPool};
use tracing::info;
use uuid::Uuid;

use super::{sort_newest_first, RecordStore, StoreError};
use crate::models::feedback::{CategoryScores, Feedback, NewFeedback};
use crate::models::interview::{GeneratedBy, Interview, NewInterview};

#[derive(Debug, FromRow)]
struct InterviewRow {
    id: Uuid,
    role: String,
    level: String,
    interview_type: String,
    techstack: Vec<String>,
    duration: Option<i32>,
    description: Option<String>,
    job_description: Option<String>,
    user_id: String,
    cover_image: String,
    created_at: Option<DateTime<Utc>>,
    finalized: bool,
    questions: Vec<String>,
    generated_by: Option<String>,
}

impl TryFrom<InterviewRow> for Interview {
    type Error = StoreError;

    fn try_from(row: InterviewRow) -> Result<Self, Self::Error> {
        let duration = row
            .duration
            .map(u32::try_from)
            .transpose()
            .map_err(|_| StoreError::Corrupt {
                id: row.id,
                reason: "negative duration".to_string(),
            })?;
        let generated_by = match row.generated_by.as_deref() {
            None => None,
            Some(value) => Some(GeneratedBy::parse(value).ok_or_else(|| StoreError::Corrupt {
                id: row.id,
                reason: format!("unknown generated_by '{value}'"),
            })?),
        };

        Ok(Interview {
            id: row.id,
            fields: NewInterview {
                role: row.role,
                level: row.level,
                interview_type: row.interview_type,
                techstack: row.techstack,
                duration,
                description: row.description,
                job_description: row.job_description,
                user_id: row.user_id,
                cover_image: row.cover_image,
                created_at: row.created_at,
                finalized: row.finalized,
                questions: row.questions,
                generated_by,
            },
        })
    }
}

#[derive(Debug, FromRow)]
struct FeedbackRow {
    id: Uuid,
    interview_id: Uuid,
    user_id: String,
    total_score: i16,
    category_scores: Json<CategoryScores>,
    strengths: Vec<String>,
    areas_for_improvement: Vec<String>,
    final_assessment: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<FeedbackRow> for Feedback {
    type Error = StoreError;

    fn try_from(row: FeedbackRow) -> Result<Self, Self::Error> {
        let total_score = u8::try_from(row.total_score).map_err(|_| StoreError::Corrupt {
            id: row.id,
            reason: format!("total_score {} out of range", row.total_score),
        })?;

        Ok(Feedback {
            id: row.id,
            fields: NewFeedback {
                interview_id: row.interview_id,
                user_id: row.user_id,
                total_score,
                category_scores: row.category_scores.0,
                strengths: row.strengths,
                areas_for_improvement: row.areas_for_improvement,
                final_assessment: row.final_assessment,
                created_at: row.created_at,
            },
        })
    }
}

/// Record store backed by the `interviews` and `feedback` tables.
#[derive(Clone)]
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

async fn insert_interview<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    interview: &NewInterview,
) -> Result<(), StoreError> {
    let duration = duration_column(id, interview.duration)?;
    sqlx::query(
        r#"
        INSERT INTO interviews
            (id, role, level, interview_type, techstack, duration, description,
             job_description, user_id, cover_image, created_at, finalized, questions, generated_by)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
        "#,
    )
    .bind(id)
    .bind(&interview.role)
    .bind(&interview.level)
    .bind(&interview.interview_type)
    .bind(&interview.techstack)
    .bind(duration)
    .bind(&interview.description)
    .bind(&interview.job_description)
    .bind(&interview.user_id)
    .bind(&interview.cover_image)
    .bind(interview.created_at)
    .bind(interview.finalized)
    .bind(&interview.questions)
    .bind(interview.generated_by.map(|g| g.as_str()))
    .execute(executor)
    .await?;
    Ok(())
}

/// `duration` is an `INTEGER` column; anything wider is refused, not clamped.
fn duration_column(id: Uuid, duration: Option<u32>) -> Result<Option<i32>, StoreError> {
    duration
        .map(i32::try_from)
        .transpose()
        .map_err(|_| StoreError::Corrupt {
            id,
            reason: format!(
                "duration {} does not fit an INTEGER column",
                duration.unwrap_or_default()
            ),
        })
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn create_interview(&self, interview: NewInterview) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        insert_interview(&self.pool, id, &interview).await?;
        info!("Inserted interview {id} for user {}", interview.user_id);
        Ok(id)
    }

    async fn create_interviews(&self, interviews: Vec<NewInterview>) -> Result<usize, StoreError> {
        // Dropping the transaction before commit rolls every insert back.
        let mut tx = self.pool.begin().await?;
        for interview in &interviews {
            insert_interview(&mut *tx, Uuid::new_v4(), interview).await?;
        }
        tx.commit().await?;

        info!("Batch inserted {} interviews", interviews.len());
        Ok(interviews.len())
    }

    async fn get_interview(&self, id: Uuid) -> Result<Option<Interview>, StoreError> {
        sqlx::query_as::<_, InterviewRow>("SELECT * FROM interviews WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(Interview::try_from)
            .transpose()
    }

    async fn interviews_by_user(&self, user_id: &str) -> Result<Vec<Interview>, StoreError> {
        let rows =
            sqlx::query_as::<_, InterviewRow>("SELECT * FROM interviews WHERE user_id = $1")
                .bind(user_id)
                .fetch_all(&self.pool)
                .await?;

        let mut interviews = rows
            .into_iter()
            .map(Interview::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        sort_newest_first(&mut interviews);
        Ok(interviews)
    }

    async fn finalized_feed(&self, limit: u32) -> Result<Vec<Interview>, StoreError> {
        sqlx::query_as::<_, InterviewRow>(
            "SELECT * FROM interviews WHERE finalized = TRUE LIMIT $1",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(Interview::try_from)
        .collect()
    }

    async fn save_feedback(
        &self,
        feedback_id: Option<Uuid>,
        feedback: NewFeedback,
    ) -> Result<Uuid, StoreError> {
        let id = feedback_id.unwrap_or_else(Uuid::new_v4);

        sqlx::query(
            r#"
            INSERT INTO feedback
                (id, interview_id, user_id, total_score, category_scores, strengths,
                 areas_for_improvement, final_assessment, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (id) DO UPDATE SET
                interview_id = EXCLUDED.interview_id,
                user_id = EXCLUDED.user_id,
                total_score = EXCLUDED.total_score,
                category_scores = EXCLUDED.category_scores,
                strengths = EXCLUDED.strengths,
                areas_for_improvement = EXCLUDED.areas_for_improvement,
                final_assessment = EXCLUDED.final_assessment,
                created_at = EXCLUDED.created_at
            "#,
        )
        .bind(id)
        .bind(feedback.interview_id)
        .bind(&feedback.user_id)
        .bind(i16::from(feedback.total_score))
        .bind(Json(feedback.category_scores))
        .bind(&feedback.strengths)
        .bind(&feedback.areas_for_improvement)
        .bind(&feedback.final_assessment)
        .bind(feedback.created_at)
        .execute(&self.pool)
        .await?;

        info!(
            "Saved feedback {id} for interview {} (user {})",
            feedback.interview_id, feedback.user_id
        );
        Ok(id)
    }

    async fn feedback_for(
        &self,
        interview_id: Uuid,
        user_id: &str,
    ) -> Result<Option<Feedback>, StoreError> {
        sqlx::query_as::<_, FeedbackRow>(
            "SELECT * FROM feedback WHERE interview_id = $1 AND user_id = $2 LIMIT 1",
        )
        .bind(interview_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?
        .map(Feedback::try_from)
        .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> InterviewRow {
        InterviewRow {
            id: Uuid::new_v4(),
            role: "Cloud Architect".to_string(),
            level: "senior".to_string(),
            interview_type: "Technical".to_string(),
            techstack: vec!["Kubernetes".to_string()],
            duration: Some(60),
            description: None,
            job_description: None,
            user_id: "user-1".to_string(),
            cover_image: "/covers/adobe.png".to_string(),
            created_at: None,
            finalized: true,
            questions: vec!["Q".to_string()],
            generated_by: Some("ai".to_string()),
        }
    }

    #[test]
    fn test_interview_row_converts() {
        let interview = Interview::try_from(row()).unwrap();
        assert_eq!(interview.fields.duration, Some(60));
        assert_eq!(interview.fields.generated_by, Some(GeneratedBy::Ai));
    }

    #[test]
    fn test_interview_row_rejects_unknown_generator() {
        let mut bad = row();
        bad.generated_by = Some("oracle".to_string());
        assert!(matches!(
            Interview::try_from(bad),
            Err(StoreError::Corrupt { .. })
        ));
    }

    #[test]
    fn test_oversized_duration_is_refused() {
        let id = Uuid::new_v4();
        assert_eq!(duration_column(id, Some(45)).unwrap(), Some(45));
        assert_eq!(duration_column(id, None).unwrap(), None);
        assert!(matches!(
            duration_column(id, Some(u32::MAX)),
            Err(StoreError::Corrupt { .. })
        ));
    }

    #[test]
    fn test_interview_row_rejects_negative_duration() {
        let mut bad = row();
        bad.duration = Some(-5);
        assert!(Interview::try_from(bad).is_err());
    }
}
