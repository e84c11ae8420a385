use std::time::Duration;

use anyhow::Context;
use tracing::{debug, warn};

use crate::config::{AppConfig, GoogleOAuthConfig};

/// Settings for the outbound client used to talk to identity providers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpClientSettings {
    pub verify_tls: bool,
    pub timeout: Duration,
    pub user_agent: String,
}

impl HttpClientSettings {
    /// Certificate checks are only skipped for local development.
    pub fn for_env(config: &AppConfig) -> Self {
        Self {
            verify_tls: !config.is_local(),
            timeout: Duration::from_secs(config.http.timeout_secs),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).into(),
        }
    }
}

pub fn build_http_client(settings: &HttpClientSettings) -> anyhow::Result<reqwest::Client> {
    if !settings.verify_tls {
        warn!("TLS certificate verification disabled for outbound HTTP client");
    }
    let client = reqwest::Client::builder()
        .timeout(settings.timeout)
        .user_agent(settings.user_agent.as_str())
        .danger_accept_invalid_certs(!settings.verify_tls)
        .build()
        .context("build http client")?;
    debug!(timeout = ?settings.timeout, verify_tls = settings.verify_tls, "http client ready");
    Ok(client)
}

/// Google OAuth credentials paired with the client that talks to Google.
#[derive(Debug, Clone)]
pub struct GoogleProvider {
    pub config: GoogleOAuthConfig,
    pub http: reqwest::Client,
}

impl GoogleProvider {
    /// `None` when the Google credentials are not configured.
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Option<Self>> {
        let Some(google) = config.google.clone() else {
            debug!("google oauth not configured");
            return Ok(None);
        };
        let http = build_http_client(&HttpClientSettings::for_env(config))
            .context("build google oauth client")?;
        Ok(Some(Self {
            config: google,
            http,
        }))
    }
}
