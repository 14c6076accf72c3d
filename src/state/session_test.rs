use super::*;

fn session() -> Session<MemoryStore> {
    Session::new(MemoryStore::default())
}

// =============================================================
// Authenticated flag
// =============================================================

#[test]
fn default_is_not_authenticated() {
    assert!(!session().is_authenticated());
}

#[test]
fn set_authenticated_persists_true() {
    let session = session();
    session.set_authenticated(true);
    assert!(session.is_authenticated());
}

#[test]
fn set_authenticated_false_overwrites() {
    let session = session();
    session.set_authenticated(true);
    session.set_authenticated(false);
    assert!(!session.is_authenticated());
}

#[test]
fn stored_values_are_the_string_literals() {
    let store = MemoryStore::default();
    let session = Session::new(store);
    session.set_authenticated(true);
    assert_eq!(session.store.read(LOGIN_KEY).as_deref(), Some("true"));
    session.set_authenticated(false);
    assert_eq!(session.store.read(LOGIN_KEY).as_deref(), Some("false"));
}

#[test]
fn garbage_value_reads_as_not_authenticated() {
    let store = MemoryStore::default();
    store.write(LOGIN_KEY, "yes please");
    assert!(!Session::new(store).is_authenticated());
}

#[test]
fn clear_removes_the_flag() {
    let session = session();
    session.set_authenticated(true);
    session.clear();
    assert!(!session.is_authenticated());
    assert!(session.store.read(LOGIN_KEY).is_none());
}

// =============================================================
// Sign-up mode preference
// =============================================================

#[test]
fn default_mode_is_sign_in() {
    assert!(!session().sign_up_mode());
}

#[test]
fn sign_up_mode_round_trips() {
    let session = session();
    session.set_sign_up_mode(true);
    assert!(session.sign_up_mode());
    session.set_sign_up_mode(false);
    assert!(!session.sign_up_mode());
}

#[test]
fn unparseable_mode_defaults_to_sign_in() {
    let store = MemoryStore::default();
    store.write(SIGN_UP_KEY, "not json");
    assert!(!Session::new(store).sign_up_mode());
}
