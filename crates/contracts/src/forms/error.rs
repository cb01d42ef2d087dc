use thiserror::Error;

/// Everything that can go wrong between page load and a confirmed
/// submission. Every variant is recovered at the UI boundary; none may
/// crash the page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// The page URL carries no form identifier. Terminal for the page.
    #[error("no form id in the page URL")]
    MissingFormId,
    /// The API answered 404 for the requested form.
    #[error("form \"{0}\" was not found")]
    FormNotFound(String),
    /// Transport, HTTP or parse failure during fetch or submit.
    #[error("network request failed: {0}")]
    Network(String),
    /// One or more required fields are missing an answer. Fully local.
    #[error("{count} required field(s) are missing an answer")]
    Validation { count: usize },
    /// The server accepted the request but rejected the submission.
    #[error("submission rejected: {0}")]
    Rejected(String),
}
