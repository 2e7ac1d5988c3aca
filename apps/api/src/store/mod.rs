//! Interview Record Store: the persistence seam for interview and feedback records.
//!
//! Reads distinguish "no data" (`Ok(None)` / empty `Vec`) from "query failed" (`Err`).
//! The production backend is PostgreSQL; the in-memory backend serves tests and
//! local runs without a database.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::feedback::{Feedback, NewFeedback};
use crate::models::interview::{Interview, NewInterview};

pub mod memory;
pub mod postgres;

pub use memory::MemoryRecordStore;
pub use postgres::PgRecordStore;

/// Default page size of the finalized interview feed.
pub const DEFAULT_FEED_LIMIT: u32 = 20;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Corrupt record {id}: {reason}")]
    Corrupt { id: Uuid, reason: String },

    #[error("Record store unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Persists one interview and returns the id the store assigned to it.
    async fn create_interview(&self, interview: NewInterview) -> Result<Uuid, StoreError>;

    /// Persists all interviews or none of them. Returns how many were written.
    async fn create_interviews(&self, interviews: Vec<NewInterview>) -> Result<usize, StoreError>;

    async fn get_interview(&self, id: Uuid) -> Result<Option<Interview>, StoreError>;

    /// All interviews owned by `user_id`, newest first.
    async fn interviews_by_user(&self, user_id: &str) -> Result<Vec<Interview>, StoreError>;

    /// Up to `limit` finalized interviews, in backend order.
    async fn finalized_feed(&self, limit: u32) -> Result<Vec<Interview>, StoreError>;

    /// Writes feedback under `feedback_id`, replacing any existing record with that id.
    /// Allocates a fresh id when none is given.
    async fn save_feedback(
        &self,
        feedback_id: Option<Uuid>,
        feedback: NewFeedback,
    ) -> Result<Uuid, StoreError>;

    /// The first feedback matching the interview/user pair, if any.
    async fn feedback_for(
        &self,
        interview_id: Uuid,
        user_id: &str,
    ) -> Result<Option<Feedback>, StoreError>;
}

/// Orders interviews by `created_at` descending. Records without a timestamp sort last.
pub fn sort_newest_first(interviews: &mut [Interview]) {
    interviews.sort_by(|a, b| b.fields.created_at.cmp(&a.fields.created_at));
}
