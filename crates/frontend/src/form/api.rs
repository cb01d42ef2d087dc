//! HTTP client for the form API.

use contracts::forms::{FormDefinition, FormError, SubmissionPayload, SubmissionResponse};
use futures_util::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use std::future::Future;

/// How long a single request may stay in flight before it is abandoned.
const REQUEST_TIMEOUT_MS: u32 = 15_000;

async fn with_timeout<T>(
    fut: impl Future<Output = Result<T, FormError>>,
) -> Result<T, FormError> {
    match select(
        Box::pin(fut),
        Box::pin(TimeoutFuture::new(REQUEST_TIMEOUT_MS)),
    )
    .await
    {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(FormError::Network("request timed out".to_string())),
    }
}

/// Fetch a form definition by id.
pub async fn fetch_form_definition(base: &str, form_id: &str) -> Result<FormDefinition, FormError> {
    let url = format!("{}/api/forms/{}", base, form_id);
    let form_id = form_id.to_string();
    with_timeout(async move {
        let response = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FormError::Network(format!("failed to send request: {e}")))?;

        if response.status() == 404 {
            return Err(FormError::FormNotFound(form_id));
        }
        if !response.ok() {
            return Err(FormError::Network(format!("HTTP {}", response.status())));
        }
        response
            .json::<FormDefinition>()
            .await
            .map_err(|e| FormError::Network(format!("failed to parse response: {e}")))
    })
    .await
}

/// POST a completed submission.
pub async fn submit_answers(
    base: &str,
    payload: &SubmissionPayload,
) -> Result<SubmissionResponse, FormError> {
    let url = format!("{}/api/forms/{}/submissions", base, payload.form_id);
    let request = Request::post(&url)
        .json(payload)
        .map_err(|e| FormError::Network(format!("failed to serialize request: {e}")))?;

    with_timeout(async move {
        let response = request
            .send()
            .await
            .map_err(|e| FormError::Network(format!("failed to send request: {e}")))?;

        if !response.ok() {
            return Err(FormError::Network(format!("HTTP {}", response.status())));
        }
        response
            .json::<SubmissionResponse>()
            .await
            .map_err(|e| FormError::Network(format!("failed to parse response: {e}")))
    })
    .await
}
