use crate::database::repository::Persistence;
use crate::dto::assessment_dto::{
    AssessmentListQuery, AssessmentPatch, CreateAssessmentPayload, SubmitAssessmentPayload,
};
use crate::error::Result;
use crate::models::assessment::Assessment;
use crate::models::EntityId;
use crate::query::{select, AssessmentFilter};
use crate::services::network::SimulatedNetwork;
use crate::store::SharedStore;

#[derive(Clone)]
pub struct AssessmentService {
    store: SharedStore,
    network: SimulatedNetwork,
    persistence: Persistence,
}

impl AssessmentService {
    pub fn new(store: SharedStore, network: SimulatedNetwork, persistence: Persistence) -> Self {
        Self {
            store,
            network,
            persistence,
        }
    }

    pub async fn list(&self, query: &AssessmentListQuery) -> Vec<Assessment> {
        let filter = AssessmentFilter::from(query);
        let store = self.store.read().await;
        select(store.assessments.as_slice(), &filter)
    }

    pub async fn get_by_id(&self, id: EntityId) -> Result<Assessment> {
        let store = self.store.read().await;
        store.assessments.get(id).cloned()
    }

    pub async fn create(&self, payload: CreateAssessmentPayload) -> Result<Assessment> {
        self.network.round_trip("create assessment").await?;
        let mut store = self.store.write().await;
        let assessment = store.assessments.insert(payload.into_assessment());
        self.persistence.upsert(&assessment).await;
        drop(store);
        tracing::info!(
            id = assessment.id,
            job_id = assessment.job_id,
            questions = assessment.questions.len(),
            "assessment created"
        );
        Ok(assessment)
    }

    pub async fn update(&self, id: EntityId, patch: AssessmentPatch) -> Result<Assessment> {
        self.network.round_trip("update assessment").await?;
        let mut store = self.store.write().await;
        let assessment = store.assessments.update(id, patch)?;
        self.persistence.upsert(&assessment).await;
        drop(store);
        tracing::info!(id, "assessment updated");
        Ok(assessment)
    }

    pub async fn delete(&self, id: EntityId) -> Result<()> {
        self.network.round_trip("delete assessment").await?;
        let mut store = self.store.write().await;
        store.remove_assessment(id)?;
        self.persistence.delete::<Assessment>(id).await;
        drop(store);
        tracing::info!(id, "assessment deleted");
        Ok(())
    }

    pub async fn submit(&self, id: EntityId, payload: SubmitAssessmentPayload) -> Result<()> {
        self.network.round_trip("submit assessment").await?;
        let response = payload.into_response();
        let candidate_id = response.candidate_id;
        let mut store = self.store.write().await;
        let assessment = store.append_response(id, response)?;
        self.persistence.upsert(&assessment).await;
        drop(store);
        tracing::info!(
            id,
            candidate_id,
            responses = assessment.candidate_responses.len(),
            "assessment response recorded"
        );
        Ok(())
    }
}
