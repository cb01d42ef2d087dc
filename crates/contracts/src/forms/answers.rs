use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::forms::definition::{FormDefinition, QuestionType};
use crate::forms::error::FormError;

/// A single collected answer. Untagged so ratings travel as bare numbers
/// and everything else as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Rating(u32),
    Text(String),
}

impl AnswerValue {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Rating(_) => false,
            Self::Text(text) => text.trim().is_empty(),
        }
    }
}

/// Client-collected mapping of question id to answer value, rebuilt from
/// current control state on every submission attempt.
pub type AnswerSet = BTreeMap<String, AnswerValue>;

/// One failed required check.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub question_id: String,
    pub message: String,
}

/// Result of a full validation pass. Failures are collected in one sweep so
/// every offending field can be marked at once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Id of the first failing question, for scroll-to-field.
    pub fn first_invalid(&self) -> Option<&str> {
        self.errors.first().map(|e| e.question_id.as_str())
    }

    pub fn message_for(&self, question_id: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.question_id == question_id)
            .map(|e| e.message.as_str())
    }

    pub fn as_error(&self) -> Option<FormError> {
        if self.errors.is_empty() {
            None
        } else {
            Some(FormError::Validation {
                count: self.errors.len(),
            })
        }
    }
}

/// Check every required question against the current raw control state.
///
/// Text kinds must be non-empty after trimming; rating and multiple-choice
/// need a selection. Optional questions never fail.
pub fn validate(definition: &FormDefinition, raw: &HashMap<String, String>) -> ValidationReport {
    let mut errors = Vec::new();
    for question in &definition.questions {
        if !question.required {
            continue;
        }
        let value = raw.get(&question.id).map(String::as_str).unwrap_or("");
        let answered = if question.question_type.is_text_kind() {
            !value.trim().is_empty()
        } else {
            !value.is_empty()
        };
        if !answered {
            errors.push(FieldError {
                question_id: question.id.clone(),
                message: required_message(question.question_type).to_string(),
            });
        }
    }
    ValidationReport { errors }
}

fn required_message(question_type: QuestionType) -> &'static str {
    match question_type {
        QuestionType::Rating => "Please pick a rating",
        QuestionType::MultipleChoice => "Please select an option",
        _ => "This field is required",
    }
}

/// Build the answer set from current control state: exactly one entry per
/// question defined in the form, answered or not.
pub fn collect_answers(definition: &FormDefinition, raw: &HashMap<String, String>) -> AnswerSet {
    definition
        .questions
        .iter()
        .map(|question| {
            let value = raw.get(&question.id).cloned().unwrap_or_default();
            let answer = match question.question_type {
                QuestionType::Rating => value
                    .parse::<u32>()
                    .map(AnswerValue::Rating)
                    .unwrap_or(AnswerValue::Text(value)),
                _ => AnswerValue::Text(value),
            };
            (question.id.clone(), answer)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::definition::Question;

    fn question(id: &str, question_type: QuestionType, required: bool) -> Question {
        Question {
            id: id.to_string(),
            question_type,
            question: format!("Question {id}"),
            required,
            placeholder: None,
            max_rating: None,
            options: None,
        }
    }

    fn definition() -> FormDefinition {
        FormDefinition {
            id: "f1".to_string(),
            name: "Test form".to_string(),
            description: String::new(),
            questions: vec![
                question("name", QuestionType::Text, true),
                question("score", QuestionType::Rating, true),
                question("channel", QuestionType::MultipleChoice, false),
                question("comments", QuestionType::LongText, false),
            ],
        }
    }

    fn raw(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_validate_reports_every_missing_required_field() {
        let report = validate(&definition(), &raw(&[]));
        assert!(!report.is_valid());
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.first_invalid(), Some("name"));
        assert!(report.message_for("score").is_some());
        assert!(report.message_for("channel").is_none());
        assert_eq!(report.as_error(), Some(FormError::Validation { count: 2 }));
    }

    #[test]
    fn test_validate_passes_when_required_fields_answered() {
        let report = validate(&definition(), &raw(&[("name", "Jane"), ("score", "4")]));
        assert!(report.is_valid());
        assert_eq!(report.as_error(), None);
    }

    #[test]
    fn test_optional_fields_never_fail() {
        // Optional fields untouched, whitespace or empty - still valid.
        let values = raw(&[("name", "Jane"), ("score", "4"), ("comments", "   ")]);
        assert!(validate(&definition(), &values).is_valid());
    }

    #[test]
    fn test_whitespace_only_text_fails_required() {
        let report = validate(&definition(), &raw(&[("name", "   "), ("score", "4")]));
        assert_eq!(report.first_invalid(), Some("name"));
        assert_eq!(report.errors.len(), 1);
    }

    #[test]
    fn test_collect_answers_one_entry_per_question() {
        let answers = collect_answers(&definition(), &raw(&[("name", "Jane"), ("score", "4")]));
        assert_eq!(answers.len(), 4);
        assert_eq!(answers["name"], AnswerValue::Text("Jane".to_string()));
        assert_eq!(answers["score"], AnswerValue::Rating(4));
        assert_eq!(answers["channel"], AnswerValue::Text(String::new()));
        assert_eq!(answers["comments"], AnswerValue::Text(String::new()));
    }

    #[test]
    fn test_answer_value_wire_shape() {
        let mut answers = AnswerSet::new();
        answers.insert("score".to_string(), AnswerValue::Rating(5));
        answers.insert("name".to_string(), AnswerValue::Text("Jane".to_string()));
        let json = serde_json::to_string(&answers).unwrap();
        assert_eq!(json, r#"{"name":"Jane","score":5}"#);

        let back: AnswerSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back["score"], AnswerValue::Rating(5));
    }

    #[test]
    fn test_answer_emptiness() {
        assert!(AnswerValue::Text("  ".to_string()).is_empty());
        assert!(!AnswerValue::Text("x".to_string()).is_empty());
        assert!(!AnswerValue::Rating(1).is_empty());
    }
}
