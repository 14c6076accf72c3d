//! Reusable UI components.

pub mod auth_form;
pub mod protected;
pub mod toast_host;
