use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::AppState;

#[axum::debug_handler]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.store.read().await;
    let body = json!({
        "status": "ok",
        "jobs": store.jobs.len(),
        "candidates": store.candidates.len(),
        "assessments": store.assessments.len(),
    });
    (StatusCode::OK, Json(body))
}
