use std::{fmt, time::Duration};

use tracing::warn;

use crate::error::{Result, TravelError};

const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_SERPAPI_BASE_URL: &str = "https://serpapi.com";
const DEFAULT_EXCHANGE_RATE_BASE_URL: &str = "https://v6.exchangerate-api.com";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Value deployments leave in `.env` templates instead of a real key.
pub const PLACEHOLDER_CREDENTIAL: &str = "xyz";

/// An API key. `Debug` output never includes the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Accept a raw key unless it is blank or the placeholder.
    pub fn parse(raw: Option<String>) -> Option<Self> {
        let raw = raw?;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == PLACEHOLDER_CREDENTIAL {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Process-wide settings, read once at startup and shared by reference.
#[derive(Clone, Debug)]
pub struct AppConfig {
    gemini_api_key: Option<Credential>,
    serpapi_api_key: Option<Credential>,
    exchange_rate_api_key: Option<Credential>,
    gemini_base_url: String,
    gemini_model: String,
    serpapi_base_url: String,
    exchange_rate_base_url: String,
    timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    /// Defaults with no credentials configured.
    pub fn new() -> Self {
        Self {
            gemini_api_key: None,
            serpapi_api_key: None,
            exchange_rate_api_key: None,
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            serpapi_base_url: DEFAULT_SERPAPI_BASE_URL.to_string(),
            exchange_rate_base_url: DEFAULT_EXCHANGE_RATE_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from any variable source.
    ///
    /// Missing credentials are not fatal: each one is reported once here and
    /// only the endpoints that need it will refuse to run.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        config.gemini_api_key = Credential::parse(lookup("GEMINI_API_KEY"));
        config.serpapi_api_key = Credential::parse(lookup("SERPAPI_API_KEY"));
        config.exchange_rate_api_key = Credential::parse(lookup("EXCHANGERATE_API_KEY"));

        if config.gemini_api_key.is_none() {
            warn!("GEMINI_API_KEY is not set; plan generation, travel method suggestion and IATA lookup will not work");
        }
        if config.serpapi_api_key.is_none() {
            warn!("SERPAPI_API_KEY is not set; flight search will not work");
        }
        if config.exchange_rate_api_key.is_none() {
            warn!("EXCHANGERATE_API_KEY is not set; live currency rates will not work");
        }

        if let Some(base_url) = lookup("GEMINI_BASE_URL") {
            config.gemini_base_url = base_url;
        }
        if let Some(model) = lookup("GEMINI_MODEL") {
            config.gemini_model = model;
        }
        if let Some(base_url) = lookup("SERPAPI_BASE_URL") {
            config.serpapi_base_url = base_url;
        }
        if let Some(base_url) = lookup("EXCHANGERATE_BASE_URL") {
            config.exchange_rate_base_url = base_url;
        }
        if let Some(raw) = lookup("TRAVEL_PLANNER_TIMEOUT_SECS") {
            let seconds: u64 = raw.trim().parse().map_err(|_| {
                TravelError::Config(format!(
                    "TRAVEL_PLANNER_TIMEOUT_SECS must be a whole number of seconds, got `{}`",
                    raw
                ))
            })?;
            config.timeout = Duration::from_secs(seconds);
        }

        Ok(config)
    }

    pub fn with_gemini_api_key(mut self, key: impl Into<String>) -> Self {
        self.gemini_api_key = Credential::parse(Some(key.into()));
        self
    }

    pub fn with_serpapi_api_key(mut self, key: impl Into<String>) -> Self {
        self.serpapi_api_key = Credential::parse(Some(key.into()));
        self
    }

    pub fn with_exchange_rate_api_key(mut self, key: impl Into<String>) -> Self {
        self.exchange_rate_api_key = Credential::parse(Some(key.into()));
        self
    }

    pub fn with_gemini_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.gemini_base_url = base_url.into();
        self
    }

    pub fn with_gemini_model(mut self, model: impl Into<String>) -> Self {
        self.gemini_model = model.into();
        self
    }

    pub fn with_serpapi_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.serpapi_base_url = base_url.into();
        self
    }

    pub fn with_exchange_rate_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.exchange_rate_base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn gemini_api_key(&self) -> Option<&Credential> {
        self.gemini_api_key.as_ref()
    }

    pub fn serpapi_api_key(&self) -> Option<&Credential> {
        self.serpapi_api_key.as_ref()
    }

    pub fn exchange_rate_api_key(&self) -> Option<&Credential> {
        self.exchange_rate_api_key.as_ref()
    }

    pub fn gemini_base_url(&self) -> &str {
        &self.gemini_base_url
    }

    pub fn gemini_model(&self) -> &str {
        &self.gemini_model
    }

    pub fn serpapi_base_url(&self) -> &str {
        &self.serpapi_base_url
    }

    pub fn exchange_rate_base_url(&self) -> &str {
        &self.exchange_rate_base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_placeholder_and_blank_credentials_are_absent() {
        assert!(Credential::parse(None).is_none());
        assert!(Credential::parse(Some("".into())).is_none());
        assert!(Credential::parse(Some("  ".into())).is_none());
        assert!(Credential::parse(Some("xyz".into())).is_none());
        assert_eq!(
            Credential::parse(Some(" real-key ".into())).unwrap().expose(),
            "real-key"
        );
    }

    #[test]
    fn test_debug_hides_secret() {
        let config = AppConfig::new().with_gemini_api_key("super-secret");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("Credential(***)"));
    }

    #[test]
    fn test_from_lookup_reads_keys_and_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "g-key"),
            ("SERPAPI_API_KEY", "xyz"),
            ("GEMINI_MODEL", "gemini-1.5-pro"),
            ("SERPAPI_BASE_URL", "http://localhost:9999"),
            ("TRAVEL_PLANNER_TIMEOUT_SECS", "15"),
        ]))
        .unwrap();

        assert_eq!(config.gemini_api_key().unwrap().expose(), "g-key");
        assert!(config.serpapi_api_key().is_none());
        assert!(config.exchange_rate_api_key().is_none());
        assert_eq!(config.gemini_model(), "gemini-1.5-pro");
        assert_eq!(config.gemini_base_url(), DEFAULT_GEMINI_BASE_URL);
        assert_eq!(config.serpapi_base_url(), "http://localhost:9999");
        assert_eq!(config.timeout(), Duration::from_secs(15));
    }

    #[test]
    fn test_bad_timeout_is_config_error() {
        let err = AppConfig::from_lookup(lookup_from(&[("TRAVEL_PLANNER_TIMEOUT_SECS", "soon")]))
            .unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }
}
