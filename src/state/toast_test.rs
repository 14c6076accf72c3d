use super::*;

// =============================================================
// Toast constructors
// =============================================================

#[test]
fn sign_in_required_message_and_id() {
    let toast = Toast::sign_in_required();
    assert_eq!(toast.id, "auth-required");
    assert_eq!(toast.message, "Please sign in to access this page");
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.duration_ms, 3000);
}

#[test]
fn auth_error_passes_backend_message_through() {
    let toast = Toast::auth_error(Some("Invalid credentials".to_owned()));
    assert_eq!(toast.message, "Invalid credentials");
    assert_eq!(toast.id, "auth-error");
}

#[test]
fn auth_error_defaults_when_no_message() {
    let toast = Toast::auth_error(None);
    assert_eq!(toast.message, GENERIC_AUTH_ERROR);
}

#[test]
fn summary_failed_is_generic() {
    let toast = Toast::summary_failed();
    assert_eq!(toast.message, "Failed to fetch video transcript");
    assert_eq!(toast.kind, ToastKind::Error);
}

#[test]
fn url_invalid_message() {
    assert_eq!(Toast::url_invalid().message, "Please enter a valid YouTube URL");
}

// =============================================================
// ToastState queue
// =============================================================

#[test]
fn push_makes_toast_active() {
    let mut state = ToastState::default();
    assert!(state.is_empty());

    state.push(Toast::signin_success());
    assert_eq!(state.active().len(), 1);
    assert_eq!(state.active()[0].toast.id, "signin-success");
}

#[test]
fn push_same_id_replaces_and_bumps_generation() {
    let mut state = ToastState::default();
    let first = state.push(Toast::auth_error(Some("first".to_owned())));
    let second = state.push(Toast::auth_error(Some("second".to_owned())));

    assert_eq!(state.active().len(), 1);
    assert_eq!(state.active()[0].toast.message, "second");
    assert!(second > first);
}

#[test]
fn dismiss_removes_matching_generation() {
    let mut state = ToastState::default();
    let generation = state.push(Toast::signin_success());

    state.dismiss("signin-success", generation);
    assert!(state.is_empty());
}

#[test]
fn dismiss_with_stale_generation_is_noop() {
    let mut state = ToastState::default();
    let stale = state.push(Toast::signin_success());
    state.push(Toast::signin_success());

    state.dismiss("signin-success", stale);
    assert_eq!(state.active().len(), 1);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = ToastState::default();
    state.push(Toast::signin_success());

    state.dismiss("no-such-toast", 1);
    assert_eq!(state.active().len(), 1);
}

#[test]
fn distinct_ids_stack() {
    let mut state = ToastState::default();
    state.push(Toast::signin_success());
    state.push(Toast::summary_success());
    assert_eq!(state.active().len(), 2);
}
