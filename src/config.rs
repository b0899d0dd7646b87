use crate::error::ApiError;
use std::time::Duration;

/// Default chat-completion endpoint base.
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Model used for both explanation and conversion.
pub const DEFAULT_MODEL: &str = "deepseek/deepseek-r1:free";

/// Default outbound request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

/// Upper bound on generated tokens per completion. Not user-configurable.
pub const MAX_OUTPUT_TOKENS: u32 = 2048;

/// Immutable provider configuration, resolved once at startup and injected
/// into the completion client at construction.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl Config {
    /// Builds a configuration, rejecting an absent or blank API key.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ApiError::Configuration(
                "provider API key is not set".into(),
            ));
        }
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            api_key,
            base_url,
            model: model.into(),
            timeout,
        })
    }

    /// Resolves configuration from the process environment.
    ///
    /// `OPENROUTER_API_KEY` is mandatory; its absence is a startup failure,
    /// not a per-request one. Everything else has a default.
    pub fn from_env() -> Result<Self, ApiError> {
        let api_key = std::env::var("OPENROUTER_API_KEY")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                ApiError::Configuration("OPENROUTER_API_KEY environment variable is not set".into())
            })?;

        let base_url =
            std::env::var("OPENROUTER_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let model = std::env::var("CODESAGE_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());
        let timeout_secs = std::env::var("CODESAGE_HTTP_TIMEOUT_SECONDS")
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);

        Self::new(api_key, base_url, model, Duration::from_secs(timeout_secs))
    }

    /// Full URL of the provider's chat-completion endpoint.
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}
