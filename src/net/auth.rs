//! Email/password calls to the hosted auth backend.
//!
//! The backend owns credential checking entirely; this module only shuttles
//! `{email, password}` to the nhost-style REST endpoints and reports success
//! or an [`AuthError`]. Error subtypes are not distinguished — a transport
//! failure and a rejected credential both come back as an `AuthError`, with
//! whatever message the backend offered.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since signing in is only
//! meaningful in the browser.

#![allow(clippy::unused_async)]

use super::types::AuthError;

#[cfg(feature = "hydrate")]
#[derive(serde::Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

/// Create an account via `POST {auth_base}/signup/email-password`.
///
/// # Errors
///
/// Returns an [`AuthError`] on any transport, configuration, or backend
/// failure.
pub async fn sign_up(email: &str, password: &str) -> Result<(), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        submit("signup/email-password", email, password).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(AuthError {
            message: Some("not available on server".to_owned()),
        })
    }
}

/// Sign in via `POST {auth_base}/signin/email-password`.
///
/// # Errors
///
/// Returns an [`AuthError`] on any transport, configuration, or backend
/// failure.
pub async fn sign_in(email: &str, password: &str) -> Result<(), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        submit("signin/email-password", email, password).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(AuthError {
            message: Some("not available on server".to_owned()),
        })
    }
}

#[cfg(feature = "hydrate")]
async fn submit(path: &str, email: &str, password: &str) -> Result<(), AuthError> {
    let config = crate::config::Config::from_build_env().map_err(|e| AuthError {
        message: Some(e.to_string()),
    })?;
    let url = format!("{}/{path}", config.auth_base_url);

    let request = gloo_net::http::Request::post(&url)
        .json(&Credentials { email, password })
        .map_err(|_| AuthError::default())?;

    let resp = request.send().await.map_err(|_| AuthError::default())?;
    if resp.ok() {
        return Ok(());
    }

    // Non-2xx: surface the backend's message when the body carries one.
    let message = match resp.text().await {
        Ok(body) => super::types::auth_error_message(&body),
        Err(_) => None,
    };
    Err(AuthError { message })
}
