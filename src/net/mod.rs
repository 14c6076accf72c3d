//! Outbound network calls: the auth backend and the summarization endpoint.

pub mod api;
pub mod auth;
pub mod types;
