use async_trait::async_trait;

use super::{BoardController, BoardResource, Listing};
use crate::client::RemoteApi;
use crate::dto::job_dto::{CreateJobPayload, JobListQuery, JobPatch};
use crate::error::Result;
use crate::models::job::Job;
use crate::models::EntityId;

pub struct Jobs;

pub type JobsBoard = BoardController<Jobs>;

#[async_trait]
impl BoardResource for Jobs {
    type Record = Job;
    type Query = JobListQuery;
    type Form = CreateJobPayload;
    type Patch = JobPatch;

    const NAME: &'static str = "jobs";

    async fn fetch(api: &dyn RemoteApi, query: &JobListQuery) -> Result<Listing<Job>> {
        Ok(api.list_jobs(query).await?.into())
    }

    async fn create(api: &dyn RemoteApi, form: CreateJobPayload) -> Result<Job> {
        api.create_job(form).await
    }

    async fn update(api: &dyn RemoteApi, id: EntityId, patch: JobPatch) -> Result<Job> {
        api.update_job(id, patch).await
    }
}

impl BoardController<Jobs> {
    /// Soft-deletes a job and reloads the board.
    pub async fn archive(&mut self, api: &dyn RemoteApi, id: EntityId) -> Result<Job> {
        let result = api.update_job(id, JobPatch::archive()).await;
        self.mutate_then_refresh(api, "archive", result).await
    }

    /// Distinct departments of the visible jobs, in first-seen order.
    pub fn departments(&self) -> Vec<String> {
        let mut departments: Vec<String> = Vec::new();
        for job in self.items() {
            if !departments.contains(&job.department) {
                departments.push(job.department.clone());
            }
        }
        departments
    }
}
