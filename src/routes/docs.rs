use axum::{response::IntoResponse, Json};
use utoipa::OpenApi;

use crate::dto::assessment_dto::{
    AssessmentPatch, CreateAssessmentPayload, SubmitAck, SubmitAssessmentPayload,
};
use crate::dto::candidate_dto::{CandidatePage, CandidatePatch, CreateCandidatePayload};
use crate::dto::job_dto::{CreateJobPayload, JobPatch};
use crate::models::assessment::{Assessment, CandidateResponse, QuestionAnswer};
use crate::models::candidate::{Candidate, CandidateStatus};
use crate::models::job::{Job, JobStatus};
use crate::models::question::Question;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::jobs::list_jobs,
        super::jobs::get_job,
        super::jobs::create_job,
        super::jobs::update_job,
        super::candidates::list_candidates,
        super::candidates::get_candidate,
        super::candidates::create_candidate,
        super::candidates::update_candidate,
        super::assessments::list_assessments,
        super::assessments::get_assessment,
        super::assessments::create_assessment,
        super::assessments::update_assessment,
        super::assessments::delete_assessment,
        super::assessments::submit_assessment,
    ),
    components(schemas(
        Job,
        JobStatus,
        JobPatch,
        CreateJobPayload,
        Candidate,
        CandidateStatus,
        CandidatePatch,
        CandidatePage,
        CreateCandidatePayload,
        Assessment,
        AssessmentPatch,
        CreateAssessmentPayload,
        Question,
        QuestionAnswer,
        CandidateResponse,
        SubmitAssessmentPayload,
        SubmitAck,
    ))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
