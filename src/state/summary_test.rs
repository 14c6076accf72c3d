use super::*;

// =============================================================
// YouTube URL validation
// =============================================================

#[test]
fn accepts_youtube_watch_urls() {
    assert!(is_youtube_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
    assert!(is_youtube_url("https://youtube.com/watch?v=abc"));
}

#[test]
fn accepts_short_youtu_be_urls() {
    assert!(is_youtube_url("https://youtu.be/abc123"));
}

#[test]
fn rejects_other_hosts() {
    assert!(!is_youtube_url("https://example.com/video"));
    assert!(!is_youtube_url("https://vimeo.com/12345"));
}

#[test]
fn rejects_malformed_input() {
    assert!(!is_youtube_url(""));
    assert!(!is_youtube_url("not a url"));
    assert!(!is_youtube_url("youtube.com/watch?v=abc"));
}

// =============================================================
// Submit lifecycle
// =============================================================

#[test]
fn valid_submit_enters_submitting_with_exact_url() {
    let mut state = SummaryState::default();
    state.set_url("https://youtu.be/abc123".to_owned());

    let url = state.begin_submit().expect("submit should proceed");
    assert_eq!(url, "https://youtu.be/abc123");
    assert!(state.is_submitting());
}

#[test]
fn invalid_submit_is_rejected_before_any_request() {
    let mut state = SummaryState::default();
    state.set_url("https://example.com/video".to_owned());

    let toast = state.begin_submit().expect_err("submit should be rejected");
    assert_eq!(toast.id, "url-invalid");
    assert_eq!(state.phase, SummaryPhase::Idle);
}

#[test]
fn success_stores_summary_text() {
    let mut state = SummaryState::default();
    state.set_url("https://youtu.be/abc123".to_owned());
    state.begin_submit().unwrap();

    let toast = state.complete_success("Hello".to_owned());
    assert_eq!(state.phase, SummaryPhase::Success("Hello".to_owned()));
    assert_eq!(state.summary_text(), Some("Hello"));
    assert_eq!(toast.id, "summary-success");
}

#[test]
fn failure_hides_summary() {
    let mut state = SummaryState::default();
    state.set_url("https://youtu.be/abc123".to_owned());
    state.begin_submit().unwrap();

    let toast = state.complete_failure();
    assert_eq!(state.phase, SummaryPhase::Failure);
    assert!(state.summary_text().is_none());
    assert_eq!(toast.message, "Failed to fetch video transcript");
}

#[test]
fn resubmit_after_result_reenters_submitting() {
    let mut state = SummaryState::default();
    state.set_url("https://youtu.be/abc123".to_owned());
    state.begin_submit().unwrap();
    state.complete_failure();

    state.begin_submit().unwrap();
    assert!(state.is_submitting());
}

// =============================================================
// URL edits after a result
// =============================================================

#[test]
fn editing_url_after_success_resets_to_idle_keeping_input() {
    let mut state = SummaryState::default();
    state.set_url("https://youtu.be/abc123".to_owned());
    state.begin_submit().unwrap();
    state.complete_success("Hello".to_owned());

    state.set_url("https://youtu.be/xyz789".to_owned());
    assert_eq!(state.phase, SummaryPhase::Idle);
    assert_eq!(state.video_url, "https://youtu.be/xyz789");
}

#[test]
fn editing_url_after_failure_resets_to_idle() {
    let mut state = SummaryState::default();
    state.set_url("https://youtu.be/abc123".to_owned());
    state.begin_submit().unwrap();
    state.complete_failure();

    state.set_url("https://youtu.be/abc1234".to_owned());
    assert_eq!(state.phase, SummaryPhase::Idle);
}

#[test]
fn editing_url_while_idle_only_updates_input() {
    let mut state = SummaryState::default();
    state.set_url("partial".to_owned());
    assert_eq!(state.phase, SummaryPhase::Idle);
    assert_eq!(state.video_url, "partial");
}

// =============================================================
// Copied flag
// =============================================================

#[test]
fn copied_flag_clears_when_result_is_reset() {
    let mut state = SummaryState::default();
    state.set_url("https://youtu.be/abc123".to_owned());
    state.begin_submit().unwrap();
    state.complete_success("Hello".to_owned());
    state.copied = true;

    state.set_url("https://youtu.be/other".to_owned());
    assert!(!state.copied);
}
