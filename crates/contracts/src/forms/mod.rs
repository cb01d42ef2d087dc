//! Shared form contracts: the wire model, validation and answer collection,
//! the error taxonomy and the submission state machine.
//!
//! Everything here is plain data and pure logic so it can be exercised in
//! native tests without a browser.

pub mod answers;
pub mod definition;
pub mod error;
pub mod submission;

pub use answers::{collect_answers, validate, AnswerSet, AnswerValue, FieldError, ValidationReport};
pub use definition::{FormDefinition, Question, QuestionType};
pub use error::FormError;
pub use submission::{Submission, SubmissionPayload, SubmissionResponse, SubmitState};
