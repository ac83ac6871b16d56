use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::jobs::models::JobRecord;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct JobsQuery {
    #[serde(default)]
    pub skills: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JobsResponse {
    pub jobs: Vec<JobRecord>,
    pub count: usize,
}

/// GET /jobs?skills=Python, SQL
///
/// Never fails on upstream errors; an empty list is a valid answer.
pub async fn handle_get_jobs(
    State(state): State<AppState>,
    Query(params): Query<JobsQuery>,
) -> Json<JobsResponse> {
    let jobs = state.aggregator.fetch_jobs(&params.skills).await;
    let count = jobs.len();
    Json(JobsResponse { jobs, count })
}
