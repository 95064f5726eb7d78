use async_trait::async_trait;

use super::{BoardController, BoardResource, Listing};
use crate::client::RemoteApi;
use crate::dto::assessment_dto::{AssessmentListQuery, AssessmentPatch, CreateAssessmentPayload};
use crate::error::Result;
use crate::models::assessment::Assessment;
use crate::models::EntityId;

pub struct Assessments;

pub type AssessmentsBoard = BoardController<Assessments>;

#[async_trait]
impl BoardResource for Assessments {
    type Record = Assessment;
    type Query = AssessmentListQuery;
    type Form = CreateAssessmentPayload;
    type Patch = AssessmentPatch;

    const NAME: &'static str = "assessments";

    async fn fetch(
        api: &dyn RemoteApi,
        query: &AssessmentListQuery,
    ) -> Result<Listing<Assessment>> {
        Ok(api.list_assessments(query).await?.into())
    }

    async fn create(api: &dyn RemoteApi, form: CreateAssessmentPayload) -> Result<Assessment> {
        api.create_assessment(form).await
    }

    async fn update(
        api: &dyn RemoteApi,
        id: EntityId,
        patch: AssessmentPatch,
    ) -> Result<Assessment> {
        api.update_assessment(id, patch).await
    }
}

impl BoardController<Assessments> {
    pub async fn delete(&mut self, api: &dyn RemoteApi, id: EntityId) -> Result<()> {
        let result = api.delete_assessment(id).await;
        self.mutate_then_refresh(api, "delete", result).await
    }
}
