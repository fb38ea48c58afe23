use axum::{
    extract::{Path, Query, State},
    Json,
};

use co_common::api::{JobSearchParams, JobView, SearchResponse};
use co_common::search::search;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::SharedState;

pub async fn search_jobs(
    State(state): State<SharedState>,
    _auth: AuthUser,
    Query(params): Query<JobSearchParams>,
) -> Json<SearchResponse<JobView>> {
    let filters = params.to_filters();
    let results = search(&state.store.jobs, &params.q, &filters)
        .into_iter()
        .map(JobView::from)
        .collect();
    Json(SearchResponse::new(results))
}

pub async fn get_job(
    State(state): State<SharedState>,
    Path(job_id): Path<String>,
    _auth: AuthUser,
) -> Result<Json<JobView>, ApiError> {
    state
        .store
        .jobs
        .iter()
        .find(|job| job.id == job_id)
        .cloned()
        .map(|job| Json(JobView::from(job)))
        .ok_or_else(|| ApiError::NotFound(format!("job {job_id} not found")))
}
