use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::assessment_dto::{
        AssessmentListQuery, AssessmentPatch, CreateAssessmentPayload, SubmitAck,
        SubmitAssessmentPayload,
    },
    error::Result,
    models::{assessment::Assessment, EntityId},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/assessments",
    params(
        ("jobId" = Option<String>, Query, description = "Only assessments for this job, or \"all\"")
    ),
    responses(
        (status = 200, description = "Assessments", body = [Assessment])
    )
)]
#[axum::debug_handler]
pub async fn list_assessments(
    State(state): State<AppState>,
    Query(query): Query<AssessmentListQuery>,
) -> Result<impl IntoResponse> {
    let assessments: Vec<Assessment> = state.assessment_service.list(&query).await;
    Ok(Json(assessments))
}

#[utoipa::path(
    get,
    path = "/api/assessments/{id}",
    params(("id" = u64, Path, description = "Assessment ID")),
    responses(
        (status = 200, description = "Assessment found", body = Assessment),
        (status = 404, description = "Assessment not found")
    )
)]
#[axum::debug_handler]
pub async fn get_assessment(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<impl IntoResponse> {
    let assessment: Assessment = state.assessment_service.get_by_id(id).await?;
    Ok(Json(assessment))
}

#[utoipa::path(
    post,
    path = "/api/assessments",
    request_body = CreateAssessmentPayload,
    responses(
        (status = 200, description = "Assessment created", body = Assessment),
        (status = 500, description = "Simulated server error, nothing stored")
    )
)]
#[axum::debug_handler]
pub async fn create_assessment(
    State(state): State<AppState>,
    Json(payload): Json<CreateAssessmentPayload>,
) -> Result<impl IntoResponse> {
    let assessment: Assessment = state.assessment_service.create(payload).await?;
    Ok(Json(assessment))
}

#[utoipa::path(
    put,
    path = "/api/assessments/{id}",
    params(("id" = u64, Path, description = "Assessment ID")),
    request_body = AssessmentPatch,
    responses(
        (status = 200, description = "Assessment updated", body = Assessment),
        (status = 404, description = "Assessment not found"),
        (status = 500, description = "Simulated server error, nothing changed")
    )
)]
#[axum::debug_handler]
pub async fn update_assessment(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(patch): Json<AssessmentPatch>,
) -> Result<impl IntoResponse> {
    let assessment: Assessment = state.assessment_service.update(id, patch).await?;
    Ok(Json(assessment))
}

#[utoipa::path(
    delete,
    path = "/api/assessments/{id}",
    params(("id" = u64, Path, description = "Assessment ID")),
    responses(
        (status = 204, description = "Assessment removed"),
        (status = 404, description = "Assessment not found"),
        (status = 500, description = "Simulated server error, nothing removed")
    )
)]
#[axum::debug_handler]
pub async fn delete_assessment(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<impl IntoResponse> {
    state.assessment_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/assessments/{id}/submit",
    params(("id" = u64, Path, description = "Assessment ID")),
    request_body = SubmitAssessmentPayload,
    responses(
        (status = 200, description = "Response recorded", body = SubmitAck),
        (status = 404, description = "Assessment not found"),
        (status = 500, description = "Simulated server error, nothing recorded")
    )
)]
#[axum::debug_handler]
pub async fn submit_assessment(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(payload): Json<SubmitAssessmentPayload>,
) -> Result<impl IntoResponse> {
    state.assessment_service.submit(id, payload).await?;
    Ok(Json(SubmitAck { success: true }))
}
