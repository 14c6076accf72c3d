#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// Expected shape of the summarization endpoint's response body.
/// Anything that does not deserialize to this is treated as failure.
#[derive(Debug, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}

/// Failure of a sign-in or sign-up call. `message` carries the backend's
/// error text when one was provided; callers fall back to a generic string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthError {
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AuthErrorBody {
    message: Option<String>,
}

/// Extract the summary text from a response body, or `None` when the body is
/// not the expected shape.
pub fn parse_summary_body(body: &str) -> Option<String> {
    serde_json::from_str::<SummaryResponse>(body)
        .ok()
        .map(|r| r.summary)
}

/// Pull the human-readable `message` out of an auth error body, if any.
pub fn auth_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<AuthErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
}
