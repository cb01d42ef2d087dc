use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::forms::answers::AnswerSet;
use crate::forms::error::FormError;

/// The JSON body POSTed to the submission endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub form_id: String,
    pub answers: AnswerSet,
    pub submitted_at: DateTime<Utc>,
}

/// What the submission endpoint answers with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Submit-button lifecycle. `Success` is terminal for the page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(String),
}

/// Guard over the submit lifecycle: at most one request in flight, no
/// further requests once a submission has been accepted, and an explicit
/// outcome for both the success and the failure path.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    state: SubmitState,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    pub fn in_flight(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    /// Move to `Submitting` if a new attempt is allowed right now.
    ///
    /// Returns `false` while a request is in flight or after a successful
    /// submission; callers must not issue a network call in that case.
    pub fn begin(&mut self) -> bool {
        match self.state {
            SubmitState::Idle | SubmitState::Error(_) => {
                self.state = SubmitState::Submitting;
                true
            }
            SubmitState::Submitting | SubmitState::Success => false,
        }
    }

    /// Record the outcome of the in-flight request and return the new state.
    ///
    /// A transport error or a server-reported rejection both land in
    /// `Error`, which keeps the form intact and allows a manual retry.
    pub fn complete(&mut self, result: Result<SubmissionResponse, FormError>) -> &SubmitState {
        self.state = match result {
            Ok(response) if response.success => SubmitState::Success,
            Ok(response) => {
                let reason = response
                    .message
                    .unwrap_or_else(|| "the server rejected the submission".to_string());
                SubmitState::Error(FormError::Rejected(reason).to_string())
            }
            Err(err) => SubmitState::Error(err.to_string()),
        };
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::answers::AnswerValue;
    use chrono::TimeZone;

    fn accepted() -> SubmissionResponse {
        SubmissionResponse {
            success: true,
            message: None,
        }
    }

    #[test]
    fn test_only_one_submission_in_flight() {
        let mut submission = Submission::new();
        assert!(submission.begin());
        assert!(submission.in_flight());
        // Second trigger while the first is pending must not start a call.
        assert!(!submission.begin());
    }

    #[test]
    fn test_success_is_terminal() {
        let mut submission = Submission::new();
        assert!(submission.begin());
        assert_eq!(submission.complete(Ok(accepted())), &SubmitState::Success);
        assert!(!submission.begin());
        assert_eq!(submission.state(), &SubmitState::Success);
    }

    #[test]
    fn test_failure_allows_retry() {
        let mut submission = Submission::new();
        assert!(submission.begin());
        let state = submission
            .complete(Err(FormError::Network("HTTP 500".to_string())))
            .clone();
        match state {
            SubmitState::Error(message) => assert!(message.contains("HTTP 500")),
            other => panic!("expected error state, got {other:?}"),
        }
        assert!(submission.begin());
    }

    #[test]
    fn test_server_rejection_carries_message() {
        let mut submission = Submission::new();
        submission.begin();
        let response = SubmissionResponse {
            success: false,
            message: Some("form is closed".to_string()),
        };
        match submission.complete(Ok(response)) {
            SubmitState::Error(message) => assert!(message.contains("form is closed")),
            other => panic!("expected error state, got {other:?}"),
        }
    }

    #[test]
    fn test_payload_wire_shape() {
        let mut answers = AnswerSet::new();
        answers.insert("name".to_string(), AnswerValue::Text("Jane".to_string()));
        answers.insert("score".to_string(), AnswerValue::Rating(4));
        let payload = SubmissionPayload {
            form_id: "abc123".to_string(),
            answers,
            submitted_at: Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap(),
        };
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&payload).unwrap()).unwrap();
        assert_eq!(json["formId"], "abc123");
        assert_eq!(json["answers"]["score"], 4);
        assert!(json["submittedAt"]
            .as_str()
            .unwrap()
            .starts_with("2024-03-15T14:02:26"));
    }

    #[test]
    fn test_response_tolerates_missing_message() {
        let response: SubmissionResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(response.success);
        assert_eq!(response.message, None);
    }
}
