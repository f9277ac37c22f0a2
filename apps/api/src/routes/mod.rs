pub mod contact;
pub mod health;
pub mod resume;
pub mod uploads;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};

use crate::state::AppState;

/// Slack on top of the file cap for multipart framing, so the transport limit
/// never fires before the upload policy gets to decide.
const MULTIPART_OVERHEAD: usize = 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.config.max_upload_bytes + MULTIPART_OVERHEAD);

    Router::new()
        .route("/health", get(health::health_handler))
        // Contact form
        .route("/api/contact", post(contact::submit_contact))
        // Resume management
        .route(
            "/api/resume/upload",
            post(resume::upload_resume).layer(upload_limit),
        )
        .route("/api/resume/latest", get(resume::latest_resume))
        .route("/api/resume/all", get(resume::all_resumes))
        .route("/api/resume/:id", delete(resume::delete_resume))
        // Gated static serving of uploaded files
        .route("/uploads/*file", get(uploads::serve_upload))
        .with_state(state)
}
