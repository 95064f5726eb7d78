//! Client side of the simulated backend, as the boards see it.

pub mod http;
pub mod in_process;

use async_trait::async_trait;

pub use http::HttpApi;
pub use in_process::InProcessApi;

use crate::dto::assessment_dto::{
    AssessmentListQuery, AssessmentPatch, CreateAssessmentPayload, SubmitAssessmentPayload,
};
use crate::dto::candidate_dto::{
    CandidateListQuery, CandidateListResponse, CandidatePatch, CreateCandidatePayload,
};
use crate::dto::job_dto::{CreateJobPayload, JobListQuery, JobPatch};
use crate::error::Result;
use crate::models::assessment::Assessment;
use crate::models::candidate::Candidate;
use crate::models::job::Job;
use crate::models::EntityId;

/// Every endpoint of the backend. Mutating calls may fail with
/// [`crate::error::Error::TransientServer`] and are not idempotent.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemoteApi: Send + Sync {
    async fn list_jobs(&self, query: &JobListQuery) -> Result<Vec<Job>>;

    async fn create_job(&self, payload: CreateJobPayload) -> Result<Job>;

    async fn update_job(&self, id: EntityId, patch: JobPatch) -> Result<Job>;

    async fn list_candidates(&self, query: &CandidateListQuery) -> Result<CandidateListResponse>;

    async fn create_candidate(&self, payload: CreateCandidatePayload) -> Result<Candidate>;

    async fn update_candidate(&self, id: EntityId, patch: CandidatePatch) -> Result<Candidate>;

    async fn list_assessments(&self, query: &AssessmentListQuery) -> Result<Vec<Assessment>>;

    async fn create_assessment(&self, payload: CreateAssessmentPayload) -> Result<Assessment>;

    async fn update_assessment(&self, id: EntityId, patch: AssessmentPatch) -> Result<Assessment>;

    async fn delete_assessment(&self, id: EntityId) -> Result<()>;

    async fn submit_assessment(&self, id: EntityId, payload: SubmitAssessmentPayload)
        -> Result<()>;
}
