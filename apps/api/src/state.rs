use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmProvider;
use crate::session::SessionLookup;
use crate::store::RecordStore;

/// Shared application state injected into all route handlers via Axum extractors.
/// Every collaborator is constructed once in `main` and passed in here.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub llm: Arc<dyn LlmProvider>,
    pub sessions: Arc<dyn SessionLookup>,
    pub config: Config,
}
