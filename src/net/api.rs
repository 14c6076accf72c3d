//! REST helper for the summarization endpoint.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`.
//! Server-side (SSR): stub returning an error since the request is only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a `Result` with a short error string; the UI collapses every
//! failure into one generic notification, so no structure is carried here.

#![allow(clippy::unused_async)]

/// Request a summary for `video_url` from the summarization endpoint.
///
/// The raw URL is passed as the `youtube_video_url` query parameter; the
/// expected response body is `{"summary": "<text>"}`. The request is not
/// retried and no client-side timeout is enforced.
///
/// # Errors
///
/// Returns an error string on transport failure, a non-2xx status, or a
/// response body that is not the expected shape.
pub async fn fetch_summary(video_url: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let config = crate::config::Config::from_build_env().map_err(|e| e.to_string())?;

        let resp = gloo_net::http::Request::get(&config.summary_api_url)
            .query([("youtube_video_url", video_url)])
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("summary request failed: {}", resp.status()));
        }

        let body = resp.text().await.map_err(|e| e.to_string())?;
        super::types::parse_summary_body(&body).ok_or_else(|| "malformed summary response".to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = video_url;
        Err("not available on server".to_owned())
    }
}
