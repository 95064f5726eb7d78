use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{EntityId, Record};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Active,
    Inactive,
    Closed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Active => "active",
            JobStatus::Inactive => "inactive",
            JobStatus::Closed => "closed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: EntityId,
    pub title: String,
    pub department: String,
    pub status: JobStatus,
    pub archived: bool,
    pub description: String,
    pub requirements: Vec<String>,
    pub location: String,
}

impl Record for Job {
    const KIND: &'static str = "job";

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
