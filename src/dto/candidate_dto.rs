use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::candidate::{Candidate, CandidateStatus, Stage};
use crate::models::EntityId;
use crate::store::Merge;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateCandidatePayload {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub phone: String,
    pub status: CandidateStatus,
    #[schema(value_type = String)]
    pub stage: Stage,
    pub experience: String,
    pub skills: Vec<String>,
    pub applied_jobs: Vec<EntityId>,
}

impl CreateCandidatePayload {
    pub fn into_candidate(self) -> Candidate {
        Candidate {
            id: 0,
            name: self.name,
            email: self.email,
            phone: self.phone,
            status: self.status,
            archived: false,
            applied_jobs: self.applied_jobs,
            stage: self.stage,
            skills: self.skills,
            experience: self.experience,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct CandidatePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CandidateStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_jobs: Option<Vec<EntityId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub stage: Option<Stage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
}

impl CandidatePatch {
    pub fn archive() -> Self {
        Self {
            archived: Some(true),
            ..Default::default()
        }
    }

    pub fn move_to(stage: impl Into<Stage>) -> Self {
        Self {
            stage: Some(stage.into()),
            ..Default::default()
        }
    }
}

impl Merge<Candidate> for CandidatePatch {
    fn merge_into(self, candidate: &mut Candidate) {
        if let Some(name) = self.name {
            candidate.name = name;
        }
        if let Some(email) = self.email {
            candidate.email = email;
        }
        if let Some(phone) = self.phone {
            candidate.phone = phone;
        }
        if let Some(status) = self.status {
            candidate.status = status;
        }
        if let Some(archived) = self.archived {
            candidate.archived = archived;
        }
        if let Some(applied_jobs) = self.applied_jobs {
            candidate.applied_jobs = applied_jobs;
        }
        if let Some(stage) = self.stage {
            candidate.stage = stage;
        }
        if let Some(skills) = self.skills {
            candidate.skills = skills;
        }
        if let Some(experience) = self.experience {
            candidate.experience = experience;
        }
    }
}

impl From<CreateCandidatePayload> for CandidatePatch {
    fn from(form: CreateCandidatePayload) -> Self {
        Self {
            name: Some(form.name),
            email: Some(form.email),
            phone: Some(form.phone),
            status: Some(form.status),
            archived: None,
            applied_jobs: Some(form.applied_jobs),
            stage: Some(form.stage),
            skills: Some(form.skills),
            experience: Some(form.experience),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CandidateListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
}

impl CandidateListQuery {
    pub fn is_paginated(&self) -> bool {
        self.page.is_some() || self.page_size.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CandidatePage {
    pub candidates: Vec<Candidate>,
    pub total: usize,
}

/// `GET /api/candidates` answers with a bare list unless paging was requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CandidateListResponse {
    Page(CandidatePage),
    All(Vec<Candidate>),
}

impl CandidateListResponse {
    pub fn total(&self) -> usize {
        match self {
            CandidateListResponse::Page(page) => page.total,
            CandidateListResponse::All(items) => items.len(),
        }
    }

    pub fn into_candidates(self) -> Vec<Candidate> {
        match self {
            CandidateListResponse::Page(page) => page.candidates,
            CandidateListResponse::All(items) => items,
        }
    }
}
