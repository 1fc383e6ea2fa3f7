//! Configuration for the journal generation service

use std::time::Duration;

/// Default Gemini model used for journal generation
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
/// Default Gemini REST endpoint
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration errors
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY (or API_KEY) must be set")]
    MissingApiKey,
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Gemini client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    /// API key sent with every request
    pub api_key: String,
    /// Model name, e.g. "gemini-3-flash-preview"
    pub model: String,
    /// Base URL without a trailing slash
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Configuration with defaults for everything but the key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load configuration from environment variables
    ///
    /// - `GEMINI_API_KEY`, falling back to `API_KEY` (required)
    /// - `GEMINI_MODEL`
    /// - `GEMINI_BASE_URL`
    /// - `GEMINI_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = non_empty("GEMINI_API_KEY")
            .or_else(|| non_empty("API_KEY"))
            .ok_or(ConfigError::MissingApiKey)?;

        let mut config = Self::new(api_key);

        if let Some(model) = non_empty("GEMINI_MODEL") {
            config = config.with_model(model);
        }
        if let Some(base_url) = non_empty("GEMINI_BASE_URL") {
            config = config.with_base_url(base_url);
        }
        if let Some(raw) = non_empty("GEMINI_TIMEOUT_SECS") {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue {
                    name: "GEMINI_TIMEOUT_SECS",
                    value: raw.clone(),
                })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }
}
