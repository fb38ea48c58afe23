use axum::{extract::State, Json};
use serde_json::json;

use crate::error::ApiError;
use crate::SharedState;

pub async fn livez() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn readyz(State(state): State<SharedState>) -> Result<Json<serde_json::Value>, ApiError> {
    if state.store.is_empty() {
        return Err(ApiError::ServiceUnavailable("record store is empty".into()));
    }

    Ok(Json(json!({
        "status": "ok",
        "workers": state.store.workers.len(),
        "jobs": state.store.jobs.len(),
        "application": env!("CARGO_PKG_NAME"),
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use co_common::store::RecordStore;

    use crate::{AppConfig, AppState};

    #[tokio::test]
    async fn readyz_rejects_an_empty_store() {
        let state = Arc::new(AppState {
            store: Arc::new(RecordStore {
                workers: Vec::new(),
                jobs: Vec::new(),
            }),
            config: AppConfig::for_tests(Default::default()),
        });

        match readyz(State(state)).await {
            Err(ApiError::ServiceUnavailable(_)) => {}
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn readyz_reports_store_counts() {
        let state = crate::test_state(None);
        let Json(body) = readyz(State(state)).await.unwrap();
        assert_eq!(body["status"], "ok");
        assert!(body["workers"].as_u64().unwrap() > 0);
    }
}
