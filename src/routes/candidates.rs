use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::candidate_dto::{
        CandidateListQuery, CandidateListResponse, CandidatePatch, CreateCandidatePayload,
    },
    error::Result,
    models::{candidate::Candidate, EntityId},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/candidates",
    params(
        ("search" = Option<String>, Query, description = "Case-insensitive match on name or email"),
        ("stage" = Option<String>, Query, description = "Exact stage, or \"all\""),
        ("jobId" = Option<String>, Query, description = "Job the candidate applied to"),
        ("page" = Option<i64>, Query, description = "1-based page; enables the paged response"),
        ("pageSize" = Option<i64>, Query, description = "Items per page; enables paging")
    ),
    responses(
        (
            status = 200,
            description = "Bare list, or {candidates, total} when paged",
            body = CandidatePage
        )
    )
)]
#[axum::debug_handler]
pub async fn list_candidates(
    State(state): State<AppState>,
    Query(query): Query<CandidateListQuery>,
) -> Result<impl IntoResponse> {
    let listing: CandidateListResponse = state.candidate_service.list(&query).await;
    Ok(Json(listing))
}

#[utoipa::path(
    get,
    path = "/api/candidates/{id}",
    params(("id" = u64, Path, description = "Candidate ID")),
    responses(
        (status = 200, description = "Candidate found", body = Candidate),
        (status = 404, description = "Candidate not found")
    )
)]
#[axum::debug_handler]
pub async fn get_candidate(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<impl IntoResponse> {
    let candidate: Candidate = state.candidate_service.get_by_id(id).await?;
    Ok(Json(candidate))
}

#[utoipa::path(
    post,
    path = "/api/candidates",
    request_body = CreateCandidatePayload,
    responses(
        (status = 200, description = "Candidate created", body = Candidate),
        (status = 500, description = "Simulated server error, nothing stored")
    )
)]
#[axum::debug_handler]
pub async fn create_candidate(
    State(state): State<AppState>,
    Json(payload): Json<CreateCandidatePayload>,
) -> Result<impl IntoResponse> {
    let candidate: Candidate = state.candidate_service.create(payload).await?;
    Ok(Json(candidate))
}

#[utoipa::path(
    put,
    path = "/api/candidates/{id}",
    params(("id" = u64, Path, description = "Candidate ID")),
    request_body = CandidatePatch,
    responses(
        (status = 200, description = "Candidate updated", body = Candidate),
        (status = 404, description = "Candidate not found"),
        (status = 500, description = "Simulated server error, nothing changed")
    )
)]
#[axum::debug_handler]
pub async fn update_candidate(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(patch): Json<CandidatePatch>,
) -> Result<impl IntoResponse> {
    let candidate: Candidate = state.candidate_service.update(id, patch).await?;
    Ok(Json(candidate))
}
