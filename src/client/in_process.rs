use async_trait::async_trait;

use super::RemoteApi;
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
use crate::AppState;

/// Calls the services directly, skipping HTTP but not the simulated network.
#[derive(Clone)]
pub struct InProcessApi {
    state: AppState,
}

impl InProcessApi {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}

#[async_trait]
impl RemoteApi for InProcessApi {
    async fn list_jobs(&self, query: &JobListQuery) -> Result<Vec<Job>> {
        Ok(self.state.job_service.list(query).await)
    }

    async fn create_job(&self, payload: CreateJobPayload) -> Result<Job> {
        self.state.job_service.create(payload).await
    }

    async fn update_job(&self, id: EntityId, patch: JobPatch) -> Result<Job> {
        self.state.job_service.update(id, patch).await
    }

    async fn list_candidates(&self, query: &CandidateListQuery) -> Result<CandidateListResponse> {
        Ok(self.state.candidate_service.list(query).await)
    }

    async fn create_candidate(&self, payload: CreateCandidatePayload) -> Result<Candidate> {
        self.state.candidate_service.create(payload).await
    }

    async fn update_candidate(&self, id: EntityId, patch: CandidatePatch) -> Result<Candidate> {
        self.state.candidate_service.update(id, patch).await
    }

    async fn list_assessments(&self, query: &AssessmentListQuery) -> Result<Vec<Assessment>> {
        Ok(self.state.assessment_service.list(query).await)
    }

    async fn create_assessment(&self, payload: CreateAssessmentPayload) -> Result<Assessment> {
        self.state.assessment_service.create(payload).await
    }

    async fn update_assessment(&self, id: EntityId, patch: AssessmentPatch) -> Result<Assessment> {
        self.state.assessment_service.update(id, patch).await
    }

    async fn delete_assessment(&self, id: EntityId) -> Result<()> {
        self.state.assessment_service.delete(id).await
    }

    async fn submit_assessment(
        &self,
        id: EntityId,
        payload: SubmitAssessmentPayload,
    ) -> Result<()> {
        self.state.assessment_service.submit(id, payload).await
    }
}
