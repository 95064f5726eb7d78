//! Canonical in-memory state for jobs, candidates and assessments.
//!
//! The store is an owned object: empty at construction, seeded at most once,
//! and shared between request handlers behind a [`SharedStore`] lock.

pub mod collection;

use std::sync::Arc;

use tokio::sync::RwLock;

pub use collection::Collection;

use crate::error::Result;
use crate::models::assessment::{Assessment, CandidateResponse};
use crate::models::candidate::Candidate;
use crate::models::job::Job;
use crate::models::EntityId;
use crate::seed::Seed;

pub type SharedStore = Arc<RwLock<EntityStore>>;

/// Partial update applied field by field over a stored record.
pub trait Merge<T> {
    fn merge_into(self, target: &mut T);
}

#[derive(Debug, Default)]
pub struct EntityStore {
    pub jobs: Collection<Job>,
    pub candidates: Collection<Candidate>,
    pub assessments: Collection<Assessment>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty() && self.candidates.is_empty() && self.assessments.is_empty()
    }

    /// Loads `seed` only when nothing has been stored yet. Returns whether the
    /// seed was applied.
    pub fn seed_if_empty(&mut self, seed: Seed) -> bool {
        if !self.is_empty() {
            return false;
        }
        self.restore(seed);
        true
    }

    /// Puts records back with their existing ids, e.g. after loading them
    /// from the local database.
    pub fn restore(&mut self, seed: Seed) {
        for job in seed.jobs {
            self.jobs.restore(job);
        }
        for candidate in seed.candidates {
            self.candidates.restore(candidate);
        }
        for assessment in seed.assessments {
            self.assessments.restore(assessment);
        }
    }

    /// Assessments are removed outright rather than archived.
    pub fn remove_assessment(&mut self, id: EntityId) -> Result<Assessment> {
        self.assessments.remove(id)
    }

    pub fn append_response(
        &mut self,
        assessment_id: EntityId,
        response: CandidateResponse,
    ) -> Result<Assessment> {
        self.assessments.mutate(assessment_id, |assessment| {
            assessment.candidate_responses.push(response);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use chrono::Utc;

    #[test]
    fn seeds_only_once() {
        let mut store = EntityStore::new();
        assert!(store.seed_if_empty(Seed::demo()));
        let jobs = store.jobs.len();
        assert!(!store.seed_if_empty(Seed::demo()));
        assert_eq!(store.jobs.len(), jobs);
    }

    #[test]
    fn append_response_requires_existing_assessment() {
        let mut store = EntityStore::new();
        store.seed_if_empty(Seed::demo());
        let response = CandidateResponse {
            candidate_id: 1,
            responses: Vec::new(),
            submitted_at: Utc::now(),
            score: None,
        };

        let missing = store.append_response(99, response.clone());
        assert!(matches!(missing, Err(Error::NotFound(_))));

        let updated = store.append_response(1, response.clone()).unwrap();
        assert_eq!(updated.candidate_responses, vec![response.clone()]);
        let again = store.append_response(1, response).unwrap();
        assert_eq!(again.candidate_responses.len(), 2);
    }
}
