use std::str::FromStr;

use anyhow::Context;
use serde::Deserialize;

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppEnv {
    Local,
    Testing,
    Staging,
    Production,
}

impl FromStr for AppEnv {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "testing" => Ok(Self::Testing),
            "staging" => Ok(Self::Staging),
            "production" => Ok(Self::Production),
            other => anyhow::bail!("unknown APP_ENV {other:?}"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleOAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: AppEnv,
    pub http: HttpConfig,
    pub google: Option<GoogleOAuthConfig>,
}

impl AppConfig {
    /// Load from the process environment, reading `.env` first if present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = match lookup("APP_ENV") {
            Some(v) => v.parse::<AppEnv>().context("parse APP_ENV")?,
            None => AppEnv::Production,
        };
        let http = HttpConfig {
            timeout_secs: lookup("HTTP_TIMEOUT_SECS")
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS),
        };
        let google = match (lookup("GOOGLE_CLIENT_ID"), lookup("GOOGLE_CLIENT_SECRET")) {
            (Some(client_id), Some(client_secret)) => Some(GoogleOAuthConfig {
                client_id,
                client_secret,
                redirect_uri: lookup("GOOGLE_REDIRECT_URI"),
            }),
            _ => None,
        };
        Ok(Self { env, http, google })
    }

    pub fn is_local(&self) -> bool {
        self.env == AppEnv::Local
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg.env, AppEnv::Production);
        assert_eq!(cfg.http.timeout_secs, 30);
        assert!(cfg.google.is_none());
        assert!(!cfg.is_local());
    }

    #[test]
    fn parses_env_case_insensitively() {
        let cfg = AppConfig::from_lookup(lookup_from(&[("APP_ENV", " Local ")])).unwrap();
        assert!(cfg.is_local());
    }

    #[test]
    fn rejects_unknown_env() {
        let err = AppConfig::from_lookup(lookup_from(&[("APP_ENV", "moon")])).unwrap_err();
        assert!(format!("{err:#}").contains("moon"));
    }

    #[test]
    fn bad_timeout_falls_back_to_default() {
        let cfg = AppConfig::from_lookup(lookup_from(&[("HTTP_TIMEOUT_SECS", "soon")])).unwrap();
        assert_eq!(cfg.http.timeout_secs, 30);
        let cfg = AppConfig::from_lookup(lookup_from(&[("HTTP_TIMEOUT_SECS", "5")])).unwrap();
        assert_eq!(cfg.http.timeout_secs, 5);
    }

    #[test]
    fn google_requires_id_and_secret() {
        let cfg = AppConfig::from_lookup(lookup_from(&[("GOOGLE_CLIENT_ID", "id")])).unwrap();
        assert!(cfg.google.is_none());

        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("GOOGLE_CLIENT_ID", "id"),
            ("GOOGLE_CLIENT_SECRET", "secret"),
            ("GOOGLE_REDIRECT_URI", "http://localhost/auth/google/callback"),
        ]))
        .unwrap();
        let google = cfg.google.expect("google configured");
        assert_eq!(google.client_id, "id");
        assert_eq!(google.client_secret, "secret");
        assert_eq!(
            google.redirect_uri.as_deref(),
            Some("http://localhost/auth/google/callback")
        );
    }
}
