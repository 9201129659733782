use std::collections::HashMap;
use std::env;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, bail, ensure};
use url::Url;

use crate::errors::SimplifyError;

pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 10;
pub const MAX_PROVIDER_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_INPUT_CHARS: usize = 3000;
pub const DEFAULT_TERM_REPORT_CAP: usize = 15;
pub const DEFAULT_ADVISORY_WORD_THRESHOLD: usize = 50;

/// One remote chat-completion provider, tried in table order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderConfig {
    pub name: String,
    pub credential_key: String,
    pub endpoint: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: Option<f32>,
}

impl ProviderConfig {
    #[must_use]
    pub fn new(name: &str, credential_key: &str, endpoint: &str, model: &str) -> Self {
        Self {
            name: name.to_string(),
            credential_key: credential_key.to_string(),
            endpoint: endpoint.to_string(),
            model: model.to_string(),
            max_tokens: 1024,
            temperature: Some(0.3),
        }
    }
}

/// Built-in provider table in priority order.
#[must_use]
pub fn default_providers() -> Vec<ProviderConfig> {
    vec![
        ProviderConfig::new(
            "groq",
            "GROQ_API_KEY",
            "https://api.groq.com/openai/v1/chat/completions",
            "llama-3.3-70b-versatile",
        ),
        ProviderConfig::new(
            "openrouter",
            "OPENROUTER_API_KEY",
            "https://openrouter.ai/api/v1/chat/completions",
            "meta-llama/llama-3.3-70b-instruct:free",
        ),
        ProviderConfig::new(
            "together",
            "TOGETHER_API_KEY",
            "https://api.together.xyz/v1/chat/completions",
            "meta-llama/Llama-3.3-70B-Instruct-Turbo",
        ),
    ]
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub providers: Vec<ProviderConfig>,
    /// Credential values keyed by `ProviderConfig::credential_key`.
    pub credentials: HashMap<String, String>,
    pub provider_timeout: Duration,
    pub max_input_chars: usize,
    pub term_report_cap: usize,
    pub advisory_word_threshold: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            providers: default_providers(),
            credentials: HashMap::new(),
            provider_timeout: Duration::from_secs(DEFAULT_PROVIDER_TIMEOUT_SECS),
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
            term_report_cap: DEFAULT_TERM_REPORT_CAP,
            advisory_word_threshold: DEFAULT_ADVISORY_WORD_THRESHOLD,
        }
    }
}

impl AppConfig {
    /// # Errors
    ///
    /// See [`AppConfig::from_lookup`].
    pub fn from_env() -> Result<Self, SimplifyError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup instead of the
    /// process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a tunable cannot be parsed, the provider
    /// timeout is outside 1..=30 seconds, or a provider endpoint is not an
    /// absolute http(s) URL.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SimplifyError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::load(&lookup).map_err(|e| SimplifyError::ConfigError(format!("{e:#}")))
    }

    fn load<F>(lookup: &F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let providers = default_providers();
        for provider in &providers {
            validate_endpoint(provider)?;
        }

        let credentials = providers
            .iter()
            .filter_map(|p| {
                lookup(&p.credential_key)
                    .filter(|v| !v.trim().is_empty())
                    .map(|v| (p.credential_key.clone(), v.trim().to_string()))
            })
            .collect();

        let timeout_secs =
            parse_tunable(lookup, "PROVIDER_TIMEOUT_SECS", DEFAULT_PROVIDER_TIMEOUT_SECS)?;
        ensure!(
            (1..=MAX_PROVIDER_TIMEOUT_SECS).contains(&timeout_secs),
            "PROVIDER_TIMEOUT_SECS: {timeout_secs} is outside 1..={MAX_PROVIDER_TIMEOUT_SECS}"
        );

        Ok(Self {
            providers,
            credentials,
            provider_timeout: Duration::from_secs(timeout_secs),
            max_input_chars: parse_tunable(lookup, "MAX_INPUT_CHARS", DEFAULT_MAX_INPUT_CHARS)?,
            term_report_cap: parse_tunable(lookup, "TERM_REPORT_CAP", DEFAULT_TERM_REPORT_CAP)?,
            advisory_word_threshold: parse_tunable(
                lookup,
                "ADVISORY_WORD_THRESHOLD",
                DEFAULT_ADVISORY_WORD_THRESHOLD,
            )?,
        })
    }

    /// Credential for `provider`, or `None` when the provider is disabled.
    #[must_use]
    pub fn credential_for(&self, provider: &ProviderConfig) -> Option<&str> {
        self.credentials
            .get(&provider.credential_key)
            .map(String::as_str)
    }

    /// Names of providers that have a credential, in priority order.
    #[must_use]
    pub fn enabled_providers(&self) -> Vec<&str> {
        self.providers
            .iter()
            .filter(|p| self.credential_for(p).is_some())
            .map(|p| p.name.as_str())
            .collect()
    }
}

fn parse_tunable<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key}: cannot parse {:?}", raw.trim())),
        _ => Ok(default),
    }
}

fn validate_endpoint(provider: &ProviderConfig) -> anyhow::Result<()> {
    let url = Url::parse(&provider.endpoint)
        .with_context(|| format!("{}: invalid endpoint", provider.name))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => bail!("{}: unsupported scheme {other}", provider.name),
    }
}
