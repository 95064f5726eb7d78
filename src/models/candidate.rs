use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use super::{EntityId, Record};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CandidateStatus {
    #[default]
    Active,
    Inactive,
}

impl CandidateStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateStatus::Active => "active",
            CandidateStatus::Inactive => "inactive",
        }
    }
}

/// Hiring pipeline stage.
///
/// The declared stages are screening through rejected, but generated data also
/// uses `applied` and `tech`, so any other string is kept verbatim in `Other`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Stage {
    #[default]
    Screening,
    Interview,
    Offer,
    Hired,
    Rejected,
    Applied,
    Tech,
    Other(String),
}

impl Stage {
    pub fn as_str(&self) -> &str {
        match self {
            Stage::Screening => "screening",
            Stage::Interview => "interview",
            Stage::Offer => "offer",
            Stage::Hired => "hired",
            Stage::Rejected => "rejected",
            Stage::Applied => "applied",
            Stage::Tech => "tech",
            Stage::Other(raw) => raw,
        }
    }

    /// True for the five stages a recruiter can pick on the board.
    pub fn is_declared(&self) -> bool {
        matches!(
            self,
            Stage::Screening | Stage::Interview | Stage::Offer | Stage::Hired | Stage::Rejected
        )
    }
}

impl From<String> for Stage {
    fn from(value: String) -> Self {
        match value.as_str() {
            "screening" => Stage::Screening,
            "interview" => Stage::Interview,
            "offer" => Stage::Offer,
            "hired" => Stage::Hired,
            "rejected" => Stage::Rejected,
            "applied" => Stage::Applied,
            "tech" => Stage::Tech,
            _ => Stage::Other(value),
        }
    }
}

impl From<&str> for Stage {
    fn from(value: &str) -> Self {
        Stage::from(value.to_string())
    }
}

impl From<Stage> for String {
    fn from(value: Stage) -> Self {
        match value {
            Stage::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: CandidateStatus,
    pub archived: bool,
    /// Job ids; references are not checked against the job collection.
    pub applied_jobs: Vec<EntityId>,
    #[schema(value_type = String)]
    pub stage: Stage,
    pub skills: Vec<String>,
    pub experience: String,
}

impl Candidate {
    pub fn has_applied_to(&self, job_id: EntityId) -> bool {
        self.applied_jobs.contains(&job_id)
    }
}

impl Record for Candidate {
    const KIND: &'static str = "candidate";

    fn id(&self) -> EntityId {
        self.id
    }

    fn assign_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn is_archived(&self) -> bool {
        self.archived
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_stage_round_trips_verbatim() {
        let stage: Stage = serde_json::from_str("\"phone-screen\"").unwrap();
        assert_eq!(stage, Stage::Other("phone-screen".into()));
        assert_eq!(serde_json::to_string(&stage).unwrap(), "\"phone-screen\"");
    }

    #[test]
    fn generated_stages_are_known_but_undeclared() {
        let tech = Stage::from("tech");
        assert_eq!(tech, Stage::Tech);
        assert!(!tech.is_declared());
        assert!(Stage::from("offer").is_declared());
    }
}
