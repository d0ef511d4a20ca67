// ABOUTME: NetBox connection configuration loaded from environment variables.
// ABOUTME: NETBOX_URL and NETBOX_TOKEN are required; the rest have defaults.

use std::time::Duration;

use crate::error::ClientError;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the NetBox API.
#[derive(Debug, Clone)]
pub struct NetBoxConfig {
    /// Base URL without a trailing slash, e.g. `https://netbox.example.com`.
    pub url: String,

    /// API token sent as `Authorization: Token <token>`.
    pub token: String,

    /// Per-request timeout.
    pub timeout: Duration,

    /// Whether to verify the server's TLS certificate.
    pub verify_tls: bool,
}

impl NetBoxConfig {
    /// Create a config from explicit parts. The URL is normalized by
    /// trimming trailing slashes.
    pub fn new(url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            url: normalize_url(&url.into()),
            token: token.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            verify_tls: true,
        }
    }

    /// Load configuration from the environment.
    ///
    /// `NETBOX_URL` and `NETBOX_TOKEN` are required. `NETBOX_TIMEOUT`
    /// (seconds) and `NETBOX_VERIFY_TLS` are optional and parsed leniently,
    /// falling back to 30 seconds and `true`.
    pub fn from_env() -> Result<Self, ClientError> {
        let url = std::env::var("NETBOX_URL")
            .map_err(|_| ClientError::Configuration("NETBOX_URL is not set".into()))?;
        let token = std::env::var("NETBOX_TOKEN")
            .map_err(|_| ClientError::Configuration("NETBOX_TOKEN is not set".into()))?;

        let timeout = std::env::var("NETBOX_TIMEOUT")
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let verify_tls = std::env::var("NETBOX_VERIFY_TLS")
            .map(|v| parse_bool(&v))
            .unwrap_or(true);

        Ok(Self {
            url: normalize_url(&url),
            token,
            timeout: Duration::from_secs(timeout),
            verify_tls,
        })
    }
}

fn normalize_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn parse_bool(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
