//! Ordered provider fallback ending in the local simplifier.

use tracing::{debug, info, warn};

use super::local::{EMPTY_INPUT_PROMPT, LocalSimplifier};
use crate::ai::client::{ChatBackend, HttpChatBackend};
use crate::core::config::AppConfig;
use crate::errors::SimplifyError;

/// Where a final answer came from. Only used for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    EmptyInput,
    Remote(String),
    Local,
}

pub struct FallbackSimplifier<B = HttpChatBackend> {
    config: AppConfig,
    backend: B,
    local: LocalSimplifier,
}

impl FallbackSimplifier<HttpChatBackend> {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_config(config: AppConfig) -> Result<Self, SimplifyError> {
        let backend = HttpChatBackend::from_config(&config)?;
        Ok(Self::with_backend(config, backend))
    }
}

impl<B: ChatBackend> FallbackSimplifier<B> {
    pub fn with_backend(config: AppConfig, backend: B) -> Self {
        let local = LocalSimplifier::from_config(&config);
        Self {
            config,
            backend,
            local,
        }
    }

    #[must_use]
    pub fn with_local(mut self, local: LocalSimplifier) -> Self {
        self.local = local;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Always produces an answer: the first usable provider response, or the
    /// local simplification when every provider is disabled or fails.
    pub async fn resolve(&self, text: &str) -> String {
        self.resolve_with_source(text).await.0
    }

    pub async fn resolve_with_source(&self, text: &str) -> (String, Source) {
        if text.trim().is_empty() {
            return (EMPTY_INPUT_PROMPT.to_string(), Source::EmptyInput);
        }

        for provider in &self.config.providers {
            let Some(credential) = self.config.credential_for(provider) else {
                debug!(provider = %provider.name, "No credential configured, skipping");
                continue;
            };

            match self.backend.complete(provider, credential, text).await {
                Ok(Some(output)) => {
                    info!(provider = %provider.name, output_chars = output.chars().count(), "Provider answered");
                    return (output, Source::Remote(provider.name.clone()));
                }
                Ok(None) => {
                    warn!(provider = %provider.name, "Provider returned no usable content");
                }
                Err(e) => {
                    warn!(provider = %provider.name, error = %e, "Provider call failed");
                }
            }
        }

        info!("Using local simplifier");
        (self.local.simplify(text), Source::Local)
    }
}
