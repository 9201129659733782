//! API Lambda handler - routes `/solve` to the fallback simplifier.

use lambda_runtime::{Error, LambdaEvent};
use once_cell::sync::OnceCell;
use serde_json::Value;
use tracing::{error, info};
use uuid::Uuid;

use super::{helpers, parsing};
use crate::ai::client::ChatBackend;
use crate::core::config::AppConfig;
use crate::core::models::SimplifyResponse;
use crate::errors::SimplifyError;
use crate::simplify::FallbackSimplifier;

pub use self::function_handler as handler;

static SIMPLIFIER: OnceCell<FallbackSimplifier> = OnceCell::new();

/// Simplifier shared by every invocation in this container. Built from the
/// environment on first use; a failed build is retried on the next call.
///
/// # Errors
///
/// Returns `ConfigError` for an invalid environment, or `HttpError` if the
/// HTTP client cannot be built.
pub fn shared_simplifier() -> Result<&'static FallbackSimplifier, SimplifyError> {
    SIMPLIFIER.get_or_try_init(|| {
        let config = AppConfig::from_env().inspect_err(|e| error!("Config error: {}", e))?;
        info!(providers = ?config.enabled_providers(), "Configured providers");
        FallbackSimplifier::from_config(config)
            .inspect_err(|e| error!("Failed to build HTTP client: {}", e))
    })
}

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Returns an error if the environment configuration is invalid or the HTTP
/// client cannot be built. Request-level problems become 4xx responses.
#[tracing::instrument(level = "info", skip(event), fields(request_id = %Uuid::new_v4()))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let simplifier = shared_simplifier()?;
    Ok(route(simplifier, &event.payload).await)
}

/// Routes one proxy event. Events without method or path (direct invokes)
/// are treated as `POST /solve`.
pub async fn route<B: ChatBackend>(simplifier: &FallbackSimplifier<B>, payload: &Value) -> Value {
    let method = parsing::request_method(payload).unwrap_or_else(|| "POST".to_string());
    let path = parsing::request_path(payload).unwrap_or("/solve");

    info!(method = %method, path = %path, "Request");

    if method == "OPTIONS" {
        return helpers::preflight();
    }

    if !path.trim_end_matches('/').ends_with("/solve") {
        return helpers::err_response(404, "Not found");
    }

    if method != "POST" {
        return helpers::err_response(405, "Method not allowed");
    }

    let request = match parsing::parse_request(payload) {
        Ok(r) => r,
        Err(e) => {
            error!("Request parse error: {}", e);
            return helpers::err_response(400, &format!("Parse Error: {e}"));
        }
    };

    info!(input_chars = request.data.chars().count(), "Simplifying");

    let (output, source) = simplifier.resolve_with_source(&request.data).await;
    info!(source = ?source, "Simplification complete");

    helpers::ok_json(&SimplifyResponse { output })
}
