#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use crate::state::session::{FlagStore, Session};
use crate::state::toast::Toast;

pub const EMAIL_ERROR: &str = "Please enter a valid email address";
pub const PASSWORD_ERROR: &str = "Password must be at least 8 characters long";

/// Which operation the form submits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

/// Per-field validation messages, recomputed on every validation pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// Reactive model behind the sign-in / sign-up form.
///
/// Credentials are transient: they live here in memory only and are dropped
/// with the page. The persisted pieces (session flag, mode preference) go
/// through the injected [`Session`] service.
#[derive(Clone, Debug, Default)]
pub struct AuthFormState {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    pub errors: FieldErrors,
    pub show_password: bool,
    pub signing_in: bool,
    pub signing_up: bool,
}

impl AuthFormState {
    pub fn with_mode(mode: AuthMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Combined "any auth operation in flight" flag; the submit control is
    /// disabled while this holds.
    pub fn is_pending(&self) -> bool {
        self.signing_in || self.signing_up
    }

    /// Editing the email clears only the email error.
    pub fn set_email(&mut self, value: String) {
        self.email = value;
        self.errors.email = None;
    }

    /// Editing the password clears only the password error.
    pub fn set_password(&mut self, value: String) {
        self.password = value;
        self.errors.password = None;
    }

    /// Switch between sign-in and sign-up, persisting the preference and
    /// resetting validation errors. Entered credentials are preserved.
    pub fn toggle_mode<S: FlagStore>(&mut self, session: &Session<S>) {
        self.mode = match self.mode {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        };
        session.set_sign_up_mode(self.mode == AuthMode::SignUp);
        self.errors = FieldErrors::default();
    }

    /// Validate current inputs, recording field errors.
    /// Returns `true` when submission may proceed.
    pub fn validate(&mut self) -> bool {
        let mut errors = FieldErrors::default();

        if !email_is_valid(&self.email) {
            errors.email = Some(EMAIL_ERROR);
        }

        // Password length only matters when creating an account.
        if self.mode == AuthMode::SignUp && self.password.chars().count() < 8 {
            errors.password = Some(PASSWORD_ERROR);
        }

        self.errors = errors;
        self.errors.is_empty()
    }
}

/// `local@domain.tld` shape: nonempty local part and a dotted domain, with no
/// whitespace or extra `@` anywhere.
pub fn email_is_valid(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.chars().any(|c| c.is_whitespace()) {
        return false;
    }
    if domain.contains('@') || domain.chars().any(|c| c.is_whitespace()) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((name, tld)) => !name.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Sign-in resolved without error: persist the session flag and hand back the
/// success toast. The caller navigates to the dashboard.
pub fn complete_sign_in<S: FlagStore>(session: &Session<S>) -> Toast {
    session.set_authenticated(true);
    Toast::signin_success()
}

/// Sign-up resolved without error: flip the form to sign-in so the new
/// account signs in explicitly. The session flag is deliberately untouched.
pub fn complete_sign_up(state: &mut AuthFormState) -> Toast {
    state.mode = AuthMode::SignIn;
    Toast::signup_success()
}

/// Shared failure path for both operations: the session flag is written
/// `false` and the backend message (or the generic fallback) is surfaced.
pub fn fail_auth<S: FlagStore>(session: &Session<S>, message: Option<String>) -> Toast {
    session.set_authenticated(false);
    Toast::auth_error(message)
}
