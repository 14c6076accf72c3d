#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Fallback shown when an auth failure carries no backend message.
pub const GENERIC_AUTH_ERROR: &str = "An error occurred. Please try again.";

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Where a toast is anchored on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastPlacement {
    #[default]
    TopCenter,
    TopRight,
}

/// A transient user-visible notification.
///
/// Each distinct scenario has a stable `id`; showing a toast with an id that
/// is already live replaces the existing one instead of stacking a duplicate.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: &'static str,
    pub kind: ToastKind,
    pub message: String,
    pub duration_ms: u64,
    pub placement: ToastPlacement,
}

impl Toast {
    /// Shown when an unauthenticated visit hits a protected route.
    pub fn sign_in_required() -> Self {
        Self {
            id: "auth-required",
            kind: ToastKind::Error,
            message: "Please sign in to access this page".to_owned(),
            duration_ms: 3000,
            placement: ToastPlacement::TopCenter,
        }
    }

    pub fn signup_success() -> Self {
        Self {
            id: "signup-success",
            kind: ToastKind::Success,
            message: "Account created successfully! You can now sign in.".to_owned(),
            duration_ms: 3000,
            placement: ToastPlacement::TopCenter,
        }
    }

    pub fn signin_success() -> Self {
        Self {
            id: "signin-success",
            kind: ToastKind::Success,
            message: "Signed in successfully!".to_owned(),
            duration_ms: 3000,
            placement: ToastPlacement::TopCenter,
        }
    }

    /// Auth failure with the backend-provided message, or the generic
    /// fallback when the backend gave none.
    pub fn auth_error(message: Option<String>) -> Self {
        Self {
            id: "auth-error",
            kind: ToastKind::Error,
            message: message.unwrap_or_else(|| GENERIC_AUTH_ERROR.to_owned()),
            duration_ms: 4000,
            placement: ToastPlacement::TopCenter,
        }
    }

    pub fn url_invalid() -> Self {
        Self {
            id: "url-invalid",
            kind: ToastKind::Error,
            message: "Please enter a valid YouTube URL".to_owned(),
            duration_ms: 4000,
            placement: ToastPlacement::TopCenter,
        }
    }

    pub fn summary_success() -> Self {
        Self {
            id: "summary-success",
            kind: ToastKind::Success,
            message: "Transcript fetched successfully!".to_owned(),
            duration_ms: 3000,
            placement: ToastPlacement::TopCenter,
        }
    }

    /// All summarization failures surface this one generic message.
    pub fn summary_failed() -> Self {
        Self {
            id: "summary-error",
            kind: ToastKind::Error,
            message: "Failed to fetch video transcript".to_owned(),
            duration_ms: 4000,
            placement: ToastPlacement::TopCenter,
        }
    }

    pub fn copy_success() -> Self {
        Self {
            id: "copy-success",
            kind: ToastKind::Success,
            message: "Copied to clipboard!".to_owned(),
            duration_ms: 3000,
            placement: ToastPlacement::TopRight,
        }
    }

    pub fn copy_failed() -> Self {
        Self {
            id: "copy-error",
            kind: ToastKind::Error,
            message: "Failed to copy text".to_owned(),
            duration_ms: 4000,
            placement: ToastPlacement::TopRight,
        }
    }
}

/// A live toast plus the generation it was pushed at.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveToast {
    pub toast: Toast,
    pub generation: u64,
}

/// Queue of currently visible toasts.
///
/// The generation counter lets an auto-dismiss timer tell whether "its" toast
/// is still the live one: re-showing an id replaces the toast and bumps the
/// generation, so the superseded timer's dismiss becomes a no-op.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastState {
    active: Vec<ActiveToast>,
    next_generation: u64,
}

impl ToastState {
    /// Add a toast, replacing any live toast with the same id.
    /// Returns the generation to pass back to [`ToastState::dismiss`].
    pub fn push(&mut self, toast: Toast) -> u64 {
        self.next_generation += 1;
        let generation = self.next_generation;
        self.active.retain(|a| a.toast.id != toast.id);
        self.active.push(ActiveToast { toast, generation });
        generation
    }

    /// Remove the toast with `id`, but only if it is still the push this
    /// caller observed.
    pub fn dismiss(&mut self, id: &str, generation: u64) {
        self.active
            .retain(|a| a.toast.id != id || a.generation != generation);
    }

    pub fn active(&self) -> &[ActiveToast] {
        &self.active
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
