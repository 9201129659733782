//! Remote chat-completion provider adapter
//!
//! One HTTP attempt per provider per request. Every failure mode is reported
//! back to the caller as a value; nothing here panics or retries.

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, info};

use super::prompt_builder::{build_prompt, plausible};
use crate::core::config::{AppConfig, ProviderConfig};
use crate::errors::SimplifyError;

/// Upper bound on how much of a provider's error body ends up in logs.
const MAX_ERROR_BODY_CHARS: usize = 200;

/// A single remote completion attempt.
///
/// `Ok(Some)` is a usable answer, `Ok(None)` means the provider answered but
/// with nothing usable, `Err` means the call itself failed.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn complete(
        &self,
        provider: &ProviderConfig,
        credential: &str,
        text: &str,
    ) -> Result<Option<String>, SimplifyError>;
}

/// `reqwest`-backed adapter for OpenAI-compatible `/chat/completions` endpoints.
pub struct HttpChatBackend {
    http: Client,
    max_input_chars: usize,
}

impl HttpChatBackend {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built (TLS backend
    /// initialisation failure).
    pub fn new(timeout: Duration, max_input_chars: usize) -> Result<Self, SimplifyError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            max_input_chars,
        })
    }

    /// # Errors
    ///
    /// See [`HttpChatBackend::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, SimplifyError> {
        Self::new(config.provider_timeout, config.max_input_chars)
    }
}

#[async_trait]
impl ChatBackend for HttpChatBackend {
    async fn complete(
        &self,
        provider: &ProviderConfig,
        credential: &str,
        text: &str,
    ) -> Result<Option<String>, SimplifyError> {
        let prompt = build_prompt(text, self.max_input_chars);

        #[cfg(feature = "debug-logs")]
        debug!("Prompt for {}:\n{:?}", provider.name, prompt);

        let request_body = request_body(provider, &prompt);

        info!(
            provider = %provider.name,
            model = %provider.model,
            input_chars = text.chars().count(),
            "Requesting completion"
        );

        let response = self
            .http
            .post(&provider.endpoint)
            .bearer_auth(credential)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                SimplifyError::HttpError(format!("{} request failed: {e}", provider.name))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let snippet: String = error_text.chars().take(MAX_ERROR_BODY_CHARS).collect();
            return Err(SimplifyError::ProviderError(format!(
                "{} returned {status}: {snippet}",
                provider.name
            )));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            SimplifyError::ParseError(format!("{} response is not JSON: {e}", provider.name))
        })?;

        let Some(content) = extract_content(&response_json) else {
            debug!(provider = %provider.name, "Response has no choices[0].message.content");
            return Ok(None);
        };

        Ok(plausible(content))
    }
}

/// Serializes a prompt into the chat-completions request body.
#[must_use]
pub fn request_body(provider: &ProviderConfig, prompt: &[ChatCompletionMessage]) -> Value {
    let messages: Vec<Value> = prompt
        .iter()
        .map(|msg| {
            let role_str = match msg.role {
                MessageRole::system => "system",
                MessageRole::assistant => "assistant",
                _ => "user",
            };
            let content_val = match &msg.content {
                Content::Text(text) => json!(text),
                _ => Value::Null,
            };
            json!({ "role": role_str, "content": content_val })
        })
        .collect();

    let mut body = json!({
        "model": provider.model,
        "messages": messages,
        "max_tokens": provider.max_tokens,
    });
    if let Some(temperature) = provider.temperature {
        body["temperature"] = json!(temperature);
    }
    body
}

/// `choices[0].message.content`, if present and a string.
#[must_use]
pub fn extract_content(response: &Value) -> Option<&str> {
    response
        .get("choices")?
        .as_array()?
        .first()?
        .get("message")?
        .get("content")?
        .as_str()
}
