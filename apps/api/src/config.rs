use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if a present variable cannot be parsed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Endpoint receiving PDF uploads; PDF import is disabled when unset.
    pub import_service_url: Option<String>,
    /// Base URL of the account service exposing `/create_user`.
    pub account_service_url: Option<String>,
    pub remote_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            import_service_url: optional_env("IMPORT_SERVICE_URL"),
            account_service_url: optional_env("ACCOUNT_SERVICE_URL"),
            remote_timeout: Duration::from_secs(
                std::env::var("REMOTE_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse::<u64>()
                    .context("REMOTE_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
        })
    }
}

/// Blank values count as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
