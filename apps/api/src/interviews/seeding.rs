//! Creating interviews from the template catalog.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::interviews::catalog::{templates, InterviewTemplate};
use crate::interviews::covers::random_cover;
use crate::store::{RecordStore, StoreError};

/// Writes one unfinalized interview per catalog template for `user_id`, all or nothing.
pub async fn seed_interviews(
    store: &dyn RecordStore,
    user_id: &str,
    cover_base_url: &str,
) -> Result<usize, StoreError> {
    let now = Utc::now();
    let interviews = templates()
        .iter()
        .map(|t| t.instantiate(user_id, random_cover(cover_base_url), now))
        .collect();

    let count = store.create_interviews(interviews).await?;
    info!("Seeded {count} interviews for user {user_id}");
    Ok(count)
}

/// Creates a single unfinalized interview from `template` and returns its id.
pub async fn start_interview(
    store: &dyn RecordStore,
    template: &InterviewTemplate,
    user_id: &str,
    cover_base_url: &str,
) -> Result<Uuid, StoreError> {
    let interview = template.instantiate(user_id, random_cover(cover_base_url), Utc::now());
    store.create_interview(interview).await
}
