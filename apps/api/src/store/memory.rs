use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::{sort_newest_first, RecordStore, StoreError};
use crate::models::feedback::{Feedback, NewFeedback};
use crate::models::interview::{Interview, NewInterview};

#[derive(Default)]
struct Collections {
    interviews: Vec<Interview>,
    feedback: Vec<Feedback>,
}

/// Process-local record store. Insertion order stands in for backend order.
#[derive(Default)]
pub struct MemoryRecordStore {
    collections: RwLock<Collections>,
    unavailable: AtomicBool,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent operation fail, simulating a backend outage.
    #[cfg(test)]
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    #[cfg(test)]
    pub async fn interview_count(&self) -> usize {
        self.collections.read().await.interviews.len()
    }

    #[cfg(test)]
    pub async fn feedback_count(&self) -> usize {
        self.collections.read().await.feedback.len()
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn create_interview(&self, interview: NewInterview) -> Result<Uuid, StoreError> {
        self.check_available()?;
        let id = Uuid::new_v4();
        self.collections.write().await.interviews.push(Interview {
            id,
            fields: interview,
        });
        debug!("Stored interview {id} in memory");
        Ok(id)
    }

    async fn create_interviews(&self, interviews: Vec<NewInterview>) -> Result<usize, StoreError> {
        self.check_available()?;
        let count = interviews.len();
        let mut collections = self.collections.write().await;
        collections
            .interviews
            .extend(interviews.into_iter().map(|fields| Interview {
                id: Uuid::new_v4(),
                fields,
            }));
        Ok(count)
    }

    async fn get_interview(&self, id: Uuid) -> Result<Option<Interview>, StoreError> {
        self.check_available()?;
        let collections = self.collections.read().await;
        Ok(collections.interviews.iter().find(|i| i.id == id).cloned())
    }

    async fn interviews_by_user(&self, user_id: &str) -> Result<Vec<Interview>, StoreError> {
        self.check_available()?;
        let mut interviews: Vec<Interview> = self
            .collections
            .read()
            .await
            .interviews
            .iter()
            .filter(|i| i.fields.user_id == user_id)
            .cloned()
            .collect();
        sort_newest_first(&mut interviews);
        Ok(interviews)
    }

    async fn finalized_feed(&self, limit: u32) -> Result<Vec<Interview>, StoreError> {
        self.check_available()?;
        let collections = self.collections.read().await;
        Ok(collections
            .interviews
            .iter()
            .filter(|i| i.fields.finalized)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn save_feedback(
        &self,
        feedback_id: Option<Uuid>,
        feedback: NewFeedback,
    ) -> Result<Uuid, StoreError> {
        self.check_available()?;
        let id = feedback_id.unwrap_or_else(Uuid::new_v4);
        let record = Feedback {
            id,
            fields: feedback,
        };

        let mut collections = self.collections.write().await;
        match collections.feedback.iter_mut().find(|f| f.id == id) {
            Some(existing) => *existing = record,
            None => collections.feedback.push(record),
        }
        Ok(id)
    }

    async fn feedback_for(
        &self,
        interview_id: Uuid,
        user_id: &str,
    ) -> Result<Option<Feedback>, StoreError> {
        self.check_available()?;
        let collections = self.collections.read().await;
        Ok(collections
            .feedback
            .iter()
            .find(|f| f.fields.interview_id == interview_id && f.fields.user_id == user_id)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;
    use crate::models::feedback::CategoryScores;

    fn new_interview(user_id: &str, finalized: bool) -> NewInterview {
        NewInterview {
            role: "Data Engineer".to_string(),
            level: "senior".to_string(),
            interview_type: "Technical".to_string(),
            techstack: vec!["Airflow".to_string()],
            duration: Some(60),
            description: None,
            job_description: None,
            user_id: user_id.to_string(),
            cover_image: "/covers/spotify.png".to_string(),
            created_at: Some(Utc::now()),
            finalized,
            questions: vec![],
            generated_by: None,
        }
    }

    fn new_feedback(interview_id: Uuid, user_id: &str, total_score: u8) -> NewFeedback {
        NewFeedback {
            interview_id,
            user_id: user_id.to_string(),
            total_score,
            category_scores: CategoryScores {
                communication_skills: 70,
                technical_knowledge: 70,
                problem_solving: 70,
                cultural_and_role_fit: 70,
                confidence_and_clarity: 70,
            },
            strengths: vec!["Clear answers".to_string()],
            areas_for_improvement: vec![],
            final_assessment: "Solid".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_interview() {
        let store = MemoryRecordStore::new();
        let id = store
            .create_interview(new_interview("user-1", false))
            .await
            .unwrap();

        let fetched = store.get_interview(id).await.unwrap().unwrap();
        assert_eq!(fetched.id, id);
        assert_eq!(fetched.fields.role, "Data Engineer");
        assert!(store.get_interview(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_interviews_by_user_filters_and_sorts() {
        let store = MemoryRecordStore::new();
        let mut older = new_interview("user-1", false);
        older.created_at = Some(Utc::now() - Duration::days(2));
        let mut undated = new_interview("user-1", false);
        undated.created_at = None;
        let newer = new_interview("user-1", true);

        let older_id = store.create_interview(older).await.unwrap();
        let undated_id = store.create_interview(undated).await.unwrap();
        let newer_id = store.create_interview(newer).await.unwrap();
        store
            .create_interview(new_interview("user-2", true))
            .await
            .unwrap();

        let ids: Vec<Uuid> = store
            .interviews_by_user("user-1")
            .await
            .unwrap()
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec![newer_id, older_id, undated_id]);
    }

    #[tokio::test]
    async fn test_finalized_feed_filters_and_caps() {
        let store = MemoryRecordStore::new();
        for i in 0..5 {
            store
                .create_interview(new_interview("user-1", i % 2 == 0))
                .await
                .unwrap();
        }

        let feed = store.finalized_feed(20).await.unwrap();
        assert_eq!(feed.len(), 3);
        assert!(feed.iter().all(|i| i.fields.finalized));

        assert_eq!(store.finalized_feed(2).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_save_feedback_with_id_overwrites() {
        let store = MemoryRecordStore::new();
        let interview_id = Uuid::new_v4();
        let feedback_id = Uuid::new_v4();

        let first = store
            .save_feedback(Some(feedback_id), new_feedback(interview_id, "user-1", 40))
            .await
            .unwrap();
        let second = store
            .save_feedback(Some(feedback_id), new_feedback(interview_id, "user-1", 85))
            .await
            .unwrap();

        assert_eq!(first, feedback_id);
        assert_eq!(second, feedback_id);
        assert_eq!(store.feedback_count().await, 1);
        let stored = store
            .feedback_for(interview_id, "user-1")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.fields.total_score, 85);
    }

    #[tokio::test]
    async fn test_save_feedback_without_id_allocates() {
        let store = MemoryRecordStore::new();
        let interview_id = Uuid::new_v4();

        let a = store
            .save_feedback(None, new_feedback(interview_id, "user-1", 40))
            .await
            .unwrap();
        let b = store
            .save_feedback(None, new_feedback(interview_id, "user-1", 50))
            .await
            .unwrap();

        assert_ne!(a, b);
        assert_eq!(store.feedback_count().await, 2);
    }

    #[tokio::test]
    async fn test_feedback_for_returns_one_of_duplicate_records() {
        let store = MemoryRecordStore::new();
        let interview_id = Uuid::new_v4();

        let a = store
            .save_feedback(None, new_feedback(interview_id, "user-1", 40))
            .await
            .unwrap();
        let b = store
            .save_feedback(None, new_feedback(interview_id, "user-1", 50))
            .await
            .unwrap();

        // Nothing deduplicates id-less writes for the same pair.
        assert_eq!(store.feedback_count().await, 2);
        let found = store
            .feedback_for(interview_id, "user-1")
            .await
            .unwrap()
            .unwrap();
        assert!(found.id == a || found.id == b);
        assert_eq!(found.fields.interview_id, interview_id);
    }

    #[tokio::test]
    async fn test_feedback_for_requires_matching_user() {
        let store = MemoryRecordStore::new();
        let interview_id = Uuid::new_v4();
        store
            .save_feedback(None, new_feedback(interview_id, "user-1", 60))
            .await
            .unwrap();

        assert!(store
            .feedback_for(interview_id, "user-2")
            .await
            .unwrap()
            .is_none());
        assert!(store
            .feedback_for(interview_id, "user-1")
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn test_unavailable_store_fails_without_writing() {
        let store = MemoryRecordStore::new();
        store.set_unavailable(true);

        let result = store
            .create_interviews(vec![new_interview("user-1", false); 3])
            .await;
        assert!(matches!(result, Err(StoreError::Unavailable(_))));

        store.set_unavailable(false);
        assert_eq!(store.interview_count().await, 0);
    }
}
