//! Built-in fixture form, served by [`FormSource::Fixture`] and by the
//! `dev-fixture` fallback when the form API is unreachable.
//!
//! [`FormSource::Fixture`]: crate::form::source::FormSource::Fixture

use contracts::forms::{FormDefinition, Question, QuestionType};

fn question(id: &str, question_type: QuestionType, prompt: &str, required: bool) -> Question {
    Question {
        id: id.to_string(),
        question_type,
        question: prompt.to_string(),
        required,
        placeholder: None,
        max_rating: None,
        options: None,
    }
}

/// A fixture covering every question type the renderer knows.
pub fn fixture_form(form_id: &str) -> FormDefinition {
    FormDefinition {
        id: form_id.to_string(),
        name: "Customer feedback".to_string(),
        description: "Built-in sample form shown while developing without a form API."
            .to_string(),
        questions: vec![
            Question {
                placeholder: Some("Jane Doe".to_string()),
                ..question("name", QuestionType::Text, "What is your name?", true)
            },
            Question {
                placeholder: Some("jane@example.com".to_string()),
                ..question("email", QuestionType::Email, "Where can we reach you?", true)
            },
            Question {
                max_rating: Some(5),
                ..question(
                    "rating",
                    QuestionType::Rating,
                    "How would you rate your experience?",
                    true,
                )
            },
            Question {
                options: Some(vec![
                    "Search engine".to_string(),
                    "A friend".to_string(),
                    "Social media".to_string(),
                    "Other".to_string(),
                ]),
                ..question(
                    "channel",
                    QuestionType::MultipleChoice,
                    "How did you hear about us?",
                    false,
                )
            },
            Question {
                placeholder: Some("Your comments".to_string()),
                ..question(
                    "comments",
                    QuestionType::LongText,
                    "Anything else we should know?",
                    false,
                )
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fixture_ids_are_unique() {
        let form = fixture_form("dev");
        let ids: HashSet<_> = form.questions.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids.len(), form.questions.len());
        assert_eq!(form.id, "dev");
    }
}
