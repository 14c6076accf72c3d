//! Routed pages.

pub mod auth;
pub mod dashboard;
pub mod history;
