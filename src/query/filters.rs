use crate::dto::assessment_dto::AssessmentListQuery;
use crate::dto::candidate_dto::CandidateListQuery;
use crate::dto::job_dto::JobListQuery;
use crate::models::assessment::Assessment;
use crate::models::candidate::Candidate;
use crate::models::job::Job;

use super::{FieldFilter, Filter, IdFilter, SearchTerm};

/// Search covers title and description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    pub search: Option<SearchTerm>,
    pub status: FieldFilter,
    pub department: FieldFilter,
}

impl From<&JobListQuery> for JobFilter {
    fn from(query: &JobListQuery) -> Self {
        Self {
            search: SearchTerm::parse(query.search.as_deref()),
            status: FieldFilter::parse(query.status.as_deref()),
            department: FieldFilter::parse(query.department.as_deref()),
        }
    }
}

impl Filter<Job> for JobFilter {
    fn matches(&self, job: &Job) -> bool {
        self.search
            .as_ref()
            .map_or(true, |term| term.matches_any(&[job.title.as_str(), job.description.as_str()]))
            && self.status.matches(job.status.as_str())
            && self.department.matches(&job.department)
    }
}

/// Search covers name and email; `job_id` matches any applied job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateFilter {
    pub search: Option<SearchTerm>,
    pub stage: FieldFilter,
    pub job_id: IdFilter,
}

impl From<&CandidateListQuery> for CandidateFilter {
    fn from(query: &CandidateListQuery) -> Self {
        Self {
            search: SearchTerm::parse(query.search.as_deref()),
            stage: FieldFilter::parse(query.stage.as_deref()),
            job_id: IdFilter::parse(query.job_id.as_deref()),
        }
    }
}

impl Filter<Candidate> for CandidateFilter {
    fn matches(&self, candidate: &Candidate) -> bool {
        self.search
            .as_ref()
            .map_or(true, |term| {
                term.matches_any(&[candidate.name.as_str(), candidate.email.as_str()])
            })
            && self.stage.matches(candidate.stage.as_str())
            && self.job_id.matches_any(&candidate.applied_jobs)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssessmentFilter {
    pub job_id: IdFilter,
}

impl From<&AssessmentListQuery> for AssessmentFilter {
    fn from(query: &AssessmentListQuery) -> Self {
        Self {
            job_id: IdFilter::parse(query.job_id.as_deref()),
        }
    }
}

impl Filter<Assessment> for AssessmentFilter {
    fn matches(&self, assessment: &Assessment) -> bool {
        self.job_id.matches(assessment.job_id)
    }
}
