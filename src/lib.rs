/// plainlegal - turns legal text into a plain-English explanation.
///
/// The service prefers a remote large-language-model answer and falls back to
/// a deterministic dictionary-substitution heuristic when no provider is
/// configured or every provider call fails. It never returns an error for a
/// piece of text.
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda (proxy integration or function URL) for the `/solve` endpoint
/// - reqwest for OpenAI-compatible chat-completion providers, tried in order
/// - a static term dictionary and sentence filter for the local fallback
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use plainlegal::core::config::AppConfig;
/// use plainlegal::simplify::FallbackSimplifier;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     plainlegal::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let simplifier = FallbackSimplifier::from_config(config)?;
///
///     let output = simplifier
///         .resolve("The tenant shall indemnify and hold harmless the landlord.")
///         .await;
///     println!("{output}");
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod simplify;

pub use errors::SimplifyError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Output is filtered by `RUST_LOG` (default `info`). Safe to call more than
/// once; later calls are no-ops.
///
/// # Example
///
/// ```
/// plainlegal::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
