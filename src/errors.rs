use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimplifyError {
    #[error("Failed to parse request: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Provider call failed: {0}")]
    ProviderError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),
}

impl From<reqwest::Error> for SimplifyError {
    fn from(error: reqwest::Error) -> Self {
        SimplifyError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for SimplifyError {
    fn from(error: serde_json::Error) -> Self {
        SimplifyError::ParseError(error.to_string())
    }
}
