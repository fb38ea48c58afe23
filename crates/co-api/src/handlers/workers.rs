use axum::{
    extract::{Path, Query, State},
    Json,
};

use co_common::api::{SearchResponse, WorkerSearchParams};
use co_common::search::search;
use co_common::Worker;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::SharedState;

pub async fn search_workers(
    State(state): State<SharedState>,
    _auth: AuthUser,
    Query(params): Query<WorkerSearchParams>,
) -> Json<SearchResponse<Worker>> {
    let filters = params.to_filters();
    let results = search(&state.store.workers, &params.q, &filters);
    Json(SearchResponse::new(results))
}

pub async fn get_worker(
    State(state): State<SharedState>,
    Path(worker_id): Path<String>,
    _auth: AuthUser,
) -> Result<Json<Worker>, ApiError> {
    state
        .store
        .workers
        .iter()
        .find(|worker| worker.id == worker_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("worker {worker_id} not found")))
}
