use super::*;

// =============================================================
// Summary body parsing
// =============================================================

#[test]
fn well_formed_body_yields_summary() {
    assert_eq!(
        parse_summary_body(r#"{"summary":"Hello"}"#),
        Some("Hello".to_owned())
    );
}

#[test]
fn extra_fields_are_ignored() {
    assert_eq!(
        parse_summary_body(r#"{"summary":"Hello","video_id":"abc123"}"#),
        Some("Hello".to_owned())
    );
}

#[test]
fn missing_summary_field_is_failure() {
    assert_eq!(parse_summary_body(r#"{"transcript":"Hello"}"#), None);
}

#[test]
fn non_string_summary_is_failure() {
    assert_eq!(parse_summary_body(r#"{"summary":42}"#), None);
}

#[test]
fn invalid_json_is_failure() {
    assert_eq!(parse_summary_body("<html>502 Bad Gateway</html>"), None);
}

// =============================================================
// Auth error body parsing
// =============================================================

#[test]
fn backend_message_is_extracted() {
    assert_eq!(
        auth_error_message(r#"{"status":401,"message":"Invalid credentials","error":"invalid-email-password"}"#),
        Some("Invalid credentials".to_owned())
    );
}

#[test]
fn missing_message_yields_none() {
    assert_eq!(auth_error_message(r#"{"status":500}"#), None);
}

#[test]
fn unparseable_body_yields_none() {
    assert_eq!(auth_error_message("gateway timeout"), None);
}
