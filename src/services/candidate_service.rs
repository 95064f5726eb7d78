use crate::database::repository::Persistence;
use crate::dto::candidate_dto::{
    CandidateListQuery, CandidateListResponse, CandidatePage, CandidatePatch,
    CreateCandidatePayload,
};
use crate::error::Result;
use crate::models::candidate::Candidate;
use crate::models::EntityId;
use crate::query::{paginate, select, CandidateFilter};
use crate::services::network::SimulatedNetwork;
use crate::store::SharedStore;

#[derive(Clone)]
pub struct CandidateService {
    store: SharedStore,
    network: SimulatedNetwork,
    persistence: Persistence,
    default_page_size: usize,
}

impl CandidateService {
    pub fn new(
        store: SharedStore,
        network: SimulatedNetwork,
        persistence: Persistence,
        default_page_size: usize,
    ) -> Self {
        Self {
            store,
            network,
            persistence,
            default_page_size: default_page_size.clamp(1, 100),
        }
    }

    pub fn default_page_size(&self) -> usize {
        self.default_page_size
    }

    /// Filtered candidates; paged when the query asks for a page or size.
    pub async fn list(&self, query: &CandidateListQuery) -> CandidateListResponse {
        let filter = CandidateFilter::from(query);
        let matching = {
            let store = self.store.read().await;
            select(store.candidates.as_slice(), &filter)
        };

        if !query.is_paginated() {
            return CandidateListResponse::All(matching);
        }

        let page_size = query
            .page_size
            .map(|size| size.clamp(1, 100) as usize)
            .unwrap_or(self.default_page_size);
        let page = paginate(matching, query.page.unwrap_or(1), page_size);
        CandidateListResponse::Page(CandidatePage {
            candidates: page.items,
            total: page.total,
        })
    }

    pub async fn get_by_id(&self, id: EntityId) -> Result<Candidate> {
        let store = self.store.read().await;
        store.candidates.get(id).cloned()
    }

    pub async fn create(&self, payload: CreateCandidatePayload) -> Result<Candidate> {
        self.network.round_trip("create candidate").await?;
        let mut store = self.store.write().await;
        let candidate = store.candidates.insert(payload.into_candidate());
        self.persistence.upsert(&candidate).await;
        drop(store);
        tracing::info!(id = candidate.id, stage = %candidate.stage, "candidate created");
        Ok(candidate)
    }

    pub async fn update(&self, id: EntityId, patch: CandidatePatch) -> Result<Candidate> {
        self.network.round_trip("update candidate").await?;
        let mut store = self.store.write().await;
        let candidate = store.candidates.update(id, patch).map_err(|e| {
            tracing::warn!(id, "update of unknown candidate");
            e
        })?;
        self.persistence.upsert(&candidate).await;
        drop(store);
        tracing::info!(
            id,
            stage = %candidate.stage,
            archived = candidate.archived,
            "candidate updated"
        );
        Ok(candidate)
    }
}
