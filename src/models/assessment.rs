use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::question::Question;
use super::{EntityId, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionAnswer {
    pub question_id: EntityId,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CandidateResponse {
    pub candidate_id: EntityId,
    pub responses: Vec<QuestionAnswer>,
    pub submitted_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub id: EntityId,
    /// Soft reference; the job may not exist.
    pub job_id: EntityId,
    pub title: String,
    pub questions: Vec<Question>,
    /// Minutes.
    pub time_limit: u32,
    /// Append-only.
    pub candidate_responses: Vec<CandidateResponse>,
}

impl Record for Assessment {
    const KIND: &'static str = "assessment";

    fn id(&self) -> EntityId {
        self.id
    }

    fn assign_id(&mut self, id: EntityId) {
        self.id = id;
    }
}
