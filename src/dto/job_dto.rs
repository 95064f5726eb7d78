use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::job::{Job, JobStatus};
use crate::store::Merge;

/// Body of `POST /api/jobs`. Doubles as the job form, whose required fields
/// are checked on the client before submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateJobPayload {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub department: String,
    pub status: JobStatus,
    #[validate(length(min = 1))]
    pub description: String,
    pub requirements: Vec<String>,
    #[validate(length(min = 1))]
    pub location: String,
}

impl CreateJobPayload {
    pub fn into_job(self) -> Job {
        Job {
            id: 0,
            title: self.title,
            department: self.department,
            status: self.status,
            archived: false,
            description: self.description,
            requirements: self.requirements,
            location: self.location,
        }
    }
}

/// Body of `PUT /api/jobs/:id`. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct JobPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl JobPatch {
    pub fn archive() -> Self {
        Self {
            archived: Some(true),
            ..Default::default()
        }
    }
}

impl Merge<Job> for JobPatch {
    fn merge_into(self, job: &mut Job) {
        if let Some(title) = self.title {
            job.title = title;
        }
        if let Some(department) = self.department {
            job.department = department;
        }
        if let Some(status) = self.status {
            job.status = status;
        }
        if let Some(archived) = self.archived {
            job.archived = archived;
        }
        if let Some(description) = self.description {
            job.description = description;
        }
        if let Some(requirements) = self.requirements {
            job.requirements = requirements;
        }
        if let Some(location) = self.location {
            job.location = location;
        }
    }
}

/// Editing a job resubmits the whole form.
impl From<CreateJobPayload> for JobPatch {
    fn from(form: CreateJobPayload) -> Self {
        Self {
            title: Some(form.title),
            department: Some(form.department),
            status: Some(form.status),
            archived: None,
            description: Some(form.description),
            requirements: Some(form.requirements),
            location: Some(form.location),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}
