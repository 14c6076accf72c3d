use super::*;

// =============================================================
// Config::new
// =============================================================

#[test]
fn auth_base_url_from_subdomain_and_region() {
    let config = Config::new("abc", "eu-central-1", None);
    assert_eq!(
        config.auth_base_url,
        "https://abc.auth.eu-central-1.nhost.run/v1"
    );
}

#[test]
fn summary_url_defaults_to_localhost() {
    let config = Config::new("abc", "eu-central-1", None);
    assert_eq!(config.summary_api_url, DEFAULT_SUMMARY_API_URL);
}

#[test]
fn explicit_summary_url_wins() {
    let config = Config::new("abc", "eu-central-1", Some("https://api.example.com/api/"));
    assert_eq!(config.summary_api_url, "https://api.example.com/api/");
}

// =============================================================
// ConfigError
// =============================================================

#[test]
fn errors_name_the_missing_variable() {
    assert_eq!(
        ConfigError::MissingSubdomain.to_string(),
        "NHOST_SUBDOMAIN build environment variable is required"
    );
    assert_eq!(
        ConfigError::MissingRegion.to_string(),
        "NHOST_REGION build environment variable is required"
    );
}
