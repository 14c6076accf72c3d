#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// localStorage key for the persisted "signed in" flag.
pub const LOGIN_KEY: &str = "isLogin";

/// localStorage key remembering the last chosen auth form mode.
pub const SIGN_UP_KEY: &str = "isSignUp";

/// String key-value persistence the session flags live in.
///
/// DESIGN
/// ======
/// The session flags are read by the auth gate and written by the auth form,
/// so the backing store is injected rather than accessed ambiently: the
/// browser backend wraps localStorage, and tests use [`MemoryStore`].
pub trait FlagStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl<S: FlagStore> FlagStore for &S {
    fn read(&self, key: &str) -> Option<String> {
        (*self).read(key)
    }

    fn write(&self, key: &str, value: &str) {
        (*self).write(key, value);
    }

    fn remove(&self, key: &str) {
        (*self).remove(key);
    }
}

/// Session-state service over a [`FlagStore`].
///
/// The authenticated flag is the sole authority the auth gate consults; it is
/// never verified against the auth backend.
pub struct Session<S> {
    store: S,
}

impl<S: FlagStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Whether the user is currently considered signed in.
    /// Absent or unparseable values read as not authenticated.
    pub fn is_authenticated(&self) -> bool {
        self.store.read(LOGIN_KEY).as_deref() == Some("true")
    }

    pub fn set_authenticated(&self, authenticated: bool) {
        self.store
            .write(LOGIN_KEY, if authenticated { "true" } else { "false" });
    }

    /// Logout: drop the signed-in flag entirely.
    pub fn clear(&self) {
        self.store.remove(LOGIN_KEY);
    }

    /// Last chosen auth form mode; `true` means sign-up. JSON-encoded bool,
    /// defaulting to sign-in on absent or unparseable values.
    pub fn sign_up_mode(&self) -> bool {
        self.store
            .read(SIGN_UP_KEY)
            .and_then(|raw| serde_json::from_str::<bool>(&raw).ok())
            .unwrap_or(false)
    }

    pub fn set_sign_up_mode(&self, sign_up: bool) {
        self.store
            .write(SIGN_UP_KEY, if sign_up { "true" } else { "false" });
    }
}

/// In-memory [`FlagStore`] for unit tests and non-browser builds.
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl FlagStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Session service backed by the browser's localStorage.
pub fn browser() -> Session<crate::util::storage::BrowserStorage> {
    Session::new(crate::util::storage::BrowserStorage)
}
