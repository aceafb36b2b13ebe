pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::session::handlers as sessions;
use crate::state::AppState;
use crate::tips;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Session lifecycle
        .route("/api/v1/sessions", post(sessions::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(sessions::handle_get_session).delete(sessions::handle_delete_session),
        )
        .route(
            "/api/v1/sessions/:id/job-description",
            put(sessions::handle_set_job_description),
        )
        .route(
            "/api/v1/sessions/:id/resume",
            post(sessions::handle_upload_resume),
        )
        .route(
            "/api/v1/sessions/:id/resume/preview",
            get(sessions::handle_resume_preview),
        )
        .route(
            "/api/v1/sessions/:id/premium/upgrade",
            post(sessions::handle_upgrade),
        )
        .route(
            "/api/v1/sessions/:id/premium/downgrade",
            post(sessions::handle_downgrade),
        )
        // Analyses
        .route(
            "/api/v1/sessions/:id/analyses",
            post(analysis::handle_run_analysis),
        )
        .route(
            "/api/v1/sessions/:id/premium/run",
            post(analysis::handle_premium_run),
        )
        .route(
            "/api/v1/artifacts/resume-rewrite",
            post(analysis::handle_rewrite_artifact),
        )
        // Reference content
        .route("/api/v1/tips", get(tips::handle_tips))
        .with_state(state)
}
