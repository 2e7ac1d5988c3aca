pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::feedback::handlers as feedback;
use crate::interviews::handlers as interviews;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/seed", post(interviews::handle_seed))
        .route(
            "/api/vapi/generate",
            post(interviews::handle_generate).get(interviews::handle_generate_health),
        )
        .route("/api/templates", get(interviews::handle_list_templates))
        .route(
            "/api/interviews",
            get(interviews::handle_feed).post(interviews::handle_start_interview),
        )
        .route("/api/interviews/:id", get(interviews::handle_get_interview))
        .route(
            "/api/interviews/:id/feedback",
            get(feedback::handle_get_feedback).post(feedback::handle_create_feedback),
        )
        .route(
            "/api/users/:user_id/interviews",
            get(interviews::handle_user_interviews),
        )
        .with_state(state)
}
