use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::job_dto::{CreateJobPayload, JobListQuery, JobPatch},
    error::Result,
    models::{job::Job, EntityId},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/jobs",
    params(
        ("search" = Option<String>, Query, description = "Substring of title or description"),
        ("status" = Option<String>, Query, description = "Exact status, or \"all\""),
        ("department" = Option<String>, Query, description = "Exact department, or \"all\"")
    ),
    responses(
        (status = 200, description = "Non-archived jobs matching every filter", body = [Job])
    )
)]
#[axum::debug_handler]
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobListQuery>,
) -> Result<impl IntoResponse> {
    let jobs: Vec<Job> = state.job_service.list(&query).await;
    Ok(Json(jobs))
}

#[utoipa::path(
    get,
    path = "/api/jobs/{id}",
    params(("id" = u64, Path, description = "Job ID")),
    responses(
        (status = 200, description = "Job found", body = Job),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<impl IntoResponse> {
    let job: Job = state.job_service.get_by_id(id).await?;
    Ok(Json(job))
}

#[utoipa::path(
    post,
    path = "/api/jobs",
    request_body = CreateJobPayload,
    responses(
        (status = 200, description = "Job created", body = Job),
        (status = 500, description = "Simulated server error, nothing stored")
    )
)]
#[axum::debug_handler]
pub async fn create_job(
    State(state): State<AppState>,
    Json(payload): Json<CreateJobPayload>,
) -> Result<impl IntoResponse> {
    let job: Job = state.job_service.create(payload).await?;
    Ok(Json(job))
}

#[utoipa::path(
    put,
    path = "/api/jobs/{id}",
    params(("id" = u64, Path, description = "Job ID")),
    request_body = JobPatch,
    responses(
        (status = 200, description = "Job updated", body = Job),
        (status = 404, description = "Job not found"),
        (status = 500, description = "Simulated server error, nothing changed")
    )
)]
#[axum::debug_handler]
pub async fn update_job(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(patch): Json<JobPatch>,
) -> Result<impl IntoResponse> {
    let job: Job = state.job_service.update(id, patch).await?;
    Ok(Json(job))
}
