pub mod health;

use axum::{extract::DefaultBodyLimit, routing::get, Router};

use crate::extraction::handlers as upload;
use crate::jobs::handlers as jobs;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/",
            get(upload::handle_upload_form).post(upload::handle_upload),
        )
        .route("/jobs", get(jobs::handle_get_jobs))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
