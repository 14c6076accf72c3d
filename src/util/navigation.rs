//! Full-page navigation, bypassing the client-side router.

/// Hard-navigate to `path` via a location assignment. Used by logout, which
/// intentionally tears down all in-memory state for the session.
pub fn hard_redirect(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
