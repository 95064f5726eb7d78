use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value as JsonValue;

use super::RemoteApi;
use crate::dto::assessment_dto::{
    AssessmentListQuery, AssessmentPatch, CreateAssessmentPayload, SubmitAck,
    SubmitAssessmentPayload,
};
use crate::dto::candidate_dto::{
    CandidateListQuery, CandidateListResponse, CandidatePatch, CreateCandidatePayload,
};
use crate::dto::job_dto::{CreateJobPayload, JobListQuery, JobPatch};
use crate::error::{Error, Result, TRANSIENT_SERVER_MESSAGE};
use crate::models::assessment::Assessment;
use crate::models::candidate::Candidate;
use crate::models::job::Job;
use crate::models::EntityId;

/// Talks to a running server over HTTP.
#[derive(Clone)]
pub struct HttpApi {
    base_url: String,
    client: Client,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(Self::with_client(base_url, client))
    }

    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<Q, T>(&self, path: &str, query: &Q) -> Result<T>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self.client.get(self.url(path)).query(query).send().await?;
        Ok(check(resp).await?.json().await?)
    }

    async fn send_json<B, T>(&self, method: reqwest::Method, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self
            .client
            .request(method, self.url(path))
            .json(body)
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }
}

/// Maps error statuses back onto the crate's error taxonomy.
async fn check(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let text = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<JsonValue>(&text)
        .ok()
        .and_then(|body| body["error"].as_str().map(str::to_string))
        .unwrap_or(text);

    Err(match status {
        // Only the simulated network's failure is transient; other 500s are
        // real server faults.
        StatusCode::INTERNAL_SERVER_ERROR if message == TRANSIENT_SERVER_MESSAGE => {
            Error::TransientServer
        }
        StatusCode::NOT_FOUND => Error::NotFound(message),
        other => Error::Remote {
            status: other.as_u16(),
            message,
        },
    })
}

#[async_trait]
impl RemoteApi for HttpApi {
    async fn list_jobs(&self, query: &JobListQuery) -> Result<Vec<Job>> {
        self.get_json("/api/jobs", query).await
    }

    async fn create_job(&self, payload: CreateJobPayload) -> Result<Job> {
        self.send_json(reqwest::Method::POST, "/api/jobs", &payload)
            .await
    }

    async fn update_job(&self, id: EntityId, patch: JobPatch) -> Result<Job> {
        self.send_json(reqwest::Method::PUT, &format!("/api/jobs/{}", id), &patch)
            .await
    }

    async fn list_candidates(&self, query: &CandidateListQuery) -> Result<CandidateListResponse> {
        self.get_json("/api/candidates", query).await
    }

    async fn create_candidate(&self, payload: CreateCandidatePayload) -> Result<Candidate> {
        self.send_json(reqwest::Method::POST, "/api/candidates", &payload)
            .await
    }

    async fn update_candidate(&self, id: EntityId, patch: CandidatePatch) -> Result<Candidate> {
        self.send_json(
            reqwest::Method::PUT,
            &format!("/api/candidates/{}", id),
            &patch,
        )
        .await
    }

    async fn list_assessments(&self, query: &AssessmentListQuery) -> Result<Vec<Assessment>> {
        self.get_json("/api/assessments", query).await
    }

    async fn create_assessment(&self, payload: CreateAssessmentPayload) -> Result<Assessment> {
        self.send_json(reqwest::Method::POST, "/api/assessments", &payload)
            .await
    }

    async fn update_assessment(&self, id: EntityId, patch: AssessmentPatch) -> Result<Assessment> {
        self.send_json(
            reqwest::Method::PUT,
            &format!("/api/assessments/{}", id),
            &patch,
        )
        .await
    }

    async fn delete_assessment(&self, id: EntityId) -> Result<()> {
        let resp = self
            .client
            .delete(self.url(&format!("/api/assessments/{}", id)))
            .send()
            .await?;
        check(resp).await?;
        Ok(())
    }

    async fn submit_assessment(
        &self,
        id: EntityId,
        payload: SubmitAssessmentPayload,
    ) -> Result<()> {
        let ack: SubmitAck = self
            .send_json(
                reqwest::Method::POST,
                &format!("/api/assessments/{}/submit", id),
                &payload,
            )
            .await?;
        if ack.success {
            Ok(())
        } else {
            Err(Error::Internal("submission was not acknowledged".to_string()))
        }
    }
}
