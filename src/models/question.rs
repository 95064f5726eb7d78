use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::EntityId;

/// Question kind. `numeric` and `file-upload` show up in generated data next
/// to the two kinds the builder offers; anything else is kept in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuestionType {
    MultipleChoice,
    Text,
    Numeric,
    FileUpload,
    Other(String),
}

impl QuestionType {
    pub fn as_str(&self) -> &str {
        match self {
            QuestionType::MultipleChoice => "multiple-choice",
            QuestionType::Text => "text",
            QuestionType::Numeric => "numeric",
            QuestionType::FileUpload => "file-upload",
            QuestionType::Other(raw) => raw,
        }
    }
}

impl From<String> for QuestionType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "multiple-choice" => QuestionType::MultipleChoice,
            "text" => QuestionType::Text,
            "numeric" => QuestionType::Numeric,
            "file-upload" => QuestionType::FileUpload,
            _ => QuestionType::Other(value),
        }
    }
}

impl From<QuestionType> for String {
    fn from(value: QuestionType) -> Self {
        match value {
            QuestionType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Unique within its assessment only.
    pub id: EntityId,
    pub question: String,
    #[serde(rename = "type")]
    #[schema(value_type = String)]
    pub question_type: QuestionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub correct_answer: String,
}

impl Question {
    /// Multiple-choice questions need options; other kinds must not carry any.
    pub fn options_consistent(&self) -> bool {
        match self.question_type {
            QuestionType::MultipleChoice => self
                .options
                .as_ref()
                .is_some_and(|options| !options.is_empty()),
            _ => self.options.is_none(),
        }
    }
}
