use serde::{Deserialize, Serialize};

/// Question kinds understood by the renderer.
///
/// Unknown wire values deserialize into [`QuestionType::Unknown`] so a newer
/// backend never breaks an older widget: the question renders as a read-only
/// note instead of failing the whole form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    Text,
    Email,
    LongText,
    Rating,
    MultipleChoice,
    #[serde(other)]
    Unknown,
}

impl QuestionType {
    /// Free-text kinds whose answers are trimmed before the required check.
    pub fn is_text_kind(&self) -> bool {
        matches!(self, Self::Text | Self::Email | Self::LongText)
    }
}

/// A single question within a form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Unique within the form; answers are keyed by it.
    pub id: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    /// The prompt shown to the user.
    pub question: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rating: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl Question {
    /// Rating scale upper bound, defaulting to a five-point scale.
    pub fn rating_scale(&self) -> u32 {
        self.max_rating.unwrap_or(5)
    }
}

/// Server-provided schema describing a form's questions and metadata.
/// Fetched once per page load and immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub questions: Vec<Question>,
}
