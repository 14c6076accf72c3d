//! Build-time configuration for the two external services.
//!
//! The auth backend is addressed nhost-style from a subdomain and region
//! baked in at compile time; both are required, matching the original
//! deployment which refuses to start without them. The summarization
//! endpoint has a local default for development.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::fmt;

pub const DEFAULT_SUMMARY_API_URL: &str = "http://localhost:8000/api/";

/// Resolved service endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub auth_base_url: String,
    pub summary_api_url: String,
}

/// A required build environment variable was not set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    MissingSubdomain,
    MissingRegion,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSubdomain => {
                write!(f, "NHOST_SUBDOMAIN build environment variable is required")
            }
            Self::MissingRegion => {
                write!(f, "NHOST_REGION build environment variable is required")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Build a config from explicit values.
    pub fn new(subdomain: &str, region: &str, summary_api_url: Option<&str>) -> Self {
        Self {
            auth_base_url: format!("https://{subdomain}.auth.{region}.nhost.run/v1"),
            summary_api_url: summary_api_url.unwrap_or(DEFAULT_SUMMARY_API_URL).to_owned(),
        }
    }

    /// Read `NHOST_SUBDOMAIN`, `NHOST_REGION`, and the optional
    /// `SUMMARY_API_URL` from the compile-time environment.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        let subdomain = option_env!("NHOST_SUBDOMAIN").ok_or(ConfigError::MissingSubdomain)?;
        let region = option_env!("NHOST_REGION").ok_or(ConfigError::MissingRegion)?;
        Ok(Self::new(subdomain, region, option_env!("SUMMARY_API_URL")))
    }
}
