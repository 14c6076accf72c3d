//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `auth_form`, `summary`, `toast`) so
//! pages and components depend on small focused models, and every state
//! transition is a plain method testable without a browser. The `gate`
//! module holds the pure render-vs-redirect decision consumed by routing.

pub mod auth_form;
pub mod gate;
pub mod session;
pub mod summary;
pub mod toast;
