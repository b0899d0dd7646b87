//! Outbound completion client.
//!
//! `CompletionProvider` is the capability seam: handlers depend on the trait,
//! so alternate backends (or test doubles) can be substituted without touching
//! prompt construction or extraction. `OpenRouterClient` is the production
//! implementation, issuing one POST per request to the configured
//! chat-completion endpoint.

use async_trait::async_trait;

use crate::config::{Config, MAX_OUTPUT_TOKENS};
use crate::error::ApiError;
use crate::models::completion::{ChatCompletionRequest, ChatMessage};
use crate::util::build_http_client;

/// A backend capable of turning a message pair into completion output.
///
/// The `Ok` value is the raw body of a successful (2xx) provider round-trip;
/// text extraction is `crate::extract`'s job. Failures are classified into
/// `ApiError` at this boundary rather than propagated as raw client errors.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ApiError>;
}

/// Production provider backed by an OpenRouter-compatible endpoint.
pub struct OpenRouterClient {
    http: reqwest::Client,
    config: Config,
}

impl OpenRouterClient {
    /// Builds the client with its own connection pool honoring the configured
    /// request timeout.
    pub fn new(config: Config) -> Self {
        let http = build_http_client(config.timeout);
        Self { http, config }
    }

    /// Builds the client around an existing `reqwest::Client`. The caller is
    /// responsible for the timeout on that client.
    pub fn with_http_client(http: reqwest::Client, config: Config) -> Self {
        Self { http, config }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }
}

#[async_trait]
impl CompletionProvider for OpenRouterClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ApiError> {
        // The key is validated at startup; this guards direct construction
        // paths and fails before any network I/O.
        if self.config.api_key.trim().is_empty() {
            return Err(ApiError::Configuration("provider API key is empty".into()));
        }

        let payload = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: messages.to_vec(),
            max_tokens: MAX_OUTPUT_TOKENS,
        };

        let url = self.config.chat_completions_url();
        tracing::debug!(%url, model = %self.config.model, "dispatching completion request");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .header(http::header::CONTENT_TYPE, "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| classify_request_error(e, self.config.timeout.as_secs()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| classify_request_error(e, self.config.timeout.as_secs()))?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "provider returned an error status");
            return Err(ApiError::Provider {
                status: status.as_u16(),
                detail: body,
            });
        }

        Ok(body)
    }
}

/// Maps a `reqwest` failure onto the service taxonomy.
fn classify_request_error(err: reqwest::Error, timeout_secs: u64) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout(timeout_secs)
    } else if err.is_builder() {
        ApiError::Internal(format!("failed to build provider request: {err}"))
    } else {
        // Connect failures, DNS errors, resets, and interrupted bodies all
        // count as transport-level failures.
        ApiError::Transport(err.to_string())
    }
}
