use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::models::assessment::{Assessment, CandidateResponse, QuestionAnswer};
use crate::models::question::Question;
use crate::models::EntityId;
use crate::store::Merge;

fn validate_questions(questions: &[Question]) -> Result<(), ValidationError> {
    if questions.iter().all(Question::options_consistent) {
        Ok(())
    } else {
        Err(ValidationError::new("multiple_choice_requires_options"))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateAssessmentPayload {
    #[validate(range(min = 1))]
    pub job_id: EntityId,
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1), custom(function = "validate_questions"))]
    pub questions: Vec<Question>,
    #[validate(range(min = 1))]
    pub time_limit: u32,
}

impl CreateAssessmentPayload {
    pub fn into_assessment(self) -> Assessment {
        Assessment {
            id: 0,
            job_id: self.job_id,
            title: self.title,
            questions: self.questions,
            time_limit: self.time_limit,
            candidate_responses: Vec::new(),
        }
    }
}

/// Submitted responses are append-only, so they cannot be patched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct AssessmentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questions: Option<Vec<Question>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<u32>,
}

impl Merge<Assessment> for AssessmentPatch {
    fn merge_into(self, assessment: &mut Assessment) {
        if let Some(job_id) = self.job_id {
            assessment.job_id = job_id;
        }
        if let Some(title) = self.title {
            assessment.title = title;
        }
        if let Some(questions) = self.questions {
            assessment.questions = questions;
        }
        if let Some(time_limit) = self.time_limit {
            assessment.time_limit = time_limit;
        }
    }
}

impl From<CreateAssessmentPayload> for AssessmentPatch {
    fn from(form: CreateAssessmentPayload) -> Self {
        Self {
            job_id: Some(form.job_id),
            title: Some(form.title),
            questions: Some(form.questions),
            time_limit: Some(form.time_limit),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AssessmentListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
}

/// Body of `POST /api/assessments/:id/submit`; `submittedAt` defaults to now.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAssessmentPayload {
    pub candidate_id: EntityId,
    #[serde(default)]
    pub responses: Vec<QuestionAnswer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl SubmitAssessmentPayload {
    pub fn into_response(self) -> CandidateResponse {
        CandidateResponse {
            candidate_id: self.candidate_id,
            responses: self.responses,
            submitted_at: self.submitted_at.unwrap_or_else(Utc::now),
            score: self.score,
        }
    }
}

impl From<CandidateResponse> for SubmitAssessmentPayload {
    fn from(response: CandidateResponse) -> Self {
        Self {
            candidate_id: response.candidate_id,
            responses: response.responses,
            submitted_at: Some(response.submitted_at),
            score: response.score,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SubmitAck {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::QuestionType;

    fn text_question(id: EntityId) -> Question {
        Question {
            id,
            question: "Explain ownership".into(),
            question_type: QuestionType::Text,
            options: None,
            correct_answer: String::new(),
        }
    }

    #[test]
    fn builder_form_requires_title_job_and_questions() {
        let empty = CreateAssessmentPayload::default();
        let errors = empty.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("job_id"));
        assert!(fields.contains_key("questions"));
        assert!(fields.contains_key("time_limit"));
    }

    #[test]
    fn multiple_choice_without_options_is_rejected() {
        let mut question = text_question(1);
        question.question_type = QuestionType::MultipleChoice;
        let form = CreateAssessmentPayload {
            job_id: 1,
            title: "Rust basics".into(),
            questions: vec![question],
            time_limit: 30,
        };
        assert!(form.validate().is_err());

        let ok = CreateAssessmentPayload {
            questions: vec![text_question(1)],
            ..form
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn patch_never_touches_responses() {
        let body = r#"{"title":"Renamed","candidateResponses":[]}"#;
        let patch: AssessmentPatch = serde_json::from_str(body).unwrap();
        assert_eq!(patch.title.as_deref(), Some("Renamed"));
        assert_eq!(patch.questions, None);
    }
}
