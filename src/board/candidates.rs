use async_trait::async_trait;

use super::{BoardController, BoardResource, FetchOutcome, Listing};
use crate::client::RemoteApi;
use crate::dto::candidate_dto::{CandidateListQuery, CandidatePatch, CreateCandidatePayload};
use crate::error::Result;
use crate::models::candidate::{Candidate, Stage};
use crate::models::EntityId;
use crate::query::pagination::total_pages;

pub struct Candidates;

pub type CandidatesBoard = BoardController<Candidates>;

#[async_trait]
impl BoardResource for Candidates {
    type Record = Candidate;
    type Query = CandidateListQuery;
    type Form = CreateCandidatePayload;
    type Patch = CandidatePatch;

    const NAME: &'static str = "candidates";

    async fn fetch(api: &dyn RemoteApi, query: &CandidateListQuery) -> Result<Listing<Candidate>> {
        let response = api.list_candidates(query).await?;
        let total = response.total();
        Ok(Listing {
            items: response.into_candidates(),
            total,
        })
    }

    async fn create(api: &dyn RemoteApi, form: CreateCandidatePayload) -> Result<Candidate> {
        api.create_candidate(form).await
    }

    async fn update(api: &dyn RemoteApi, id: EntityId, patch: CandidatePatch) -> Result<Candidate> {
        api.update_candidate(id, patch).await
    }
}

impl BoardController<Candidates> {
    /// A board that requests `page_size` candidates at a time, starting at
    /// page 1.
    pub fn paged(page_size: usize) -> Self {
        Self::new(CandidateListQuery {
            page: Some(1),
            page_size: Some(page_size.clamp(1, 100) as i64),
            ..Default::default()
        })
    }

    pub fn page(&self) -> Option<i64> {
        self.query().page
    }

    /// Pages needed for the current total; 1 when the board isn't paged.
    pub fn page_count(&self) -> usize {
        match self.query().page_size {
            Some(size) if size > 0 => total_pages(self.total(), size as usize),
            _ => 1,
        }
    }

    pub async fn go_to_page(&mut self, api: &dyn RemoteApi, page: i64) -> FetchOutcome {
        let query = CandidateListQuery {
            page: Some(page),
            ..self.query().clone()
        };
        self.apply_query(api, query).await
    }

    pub async fn archive(&mut self, api: &dyn RemoteApi, id: EntityId) -> Result<Candidate> {
        let result = api.update_candidate(id, CandidatePatch::archive()).await;
        self.mutate_then_refresh(api, "archive", result).await
    }

    pub async fn move_to_stage(
        &mut self,
        api: &dyn RemoteApi,
        id: EntityId,
        stage: Stage,
    ) -> Result<Candidate> {
        let result = api.update_candidate(id, CandidatePatch::move_to(stage)).await;
        self.mutate_then_refresh(api, "move stage", result).await
    }
}
