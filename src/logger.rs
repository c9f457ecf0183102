use crate::errors::AggregatorError;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber for the binary. Logs go to stderr so the
/// document on stdout stays clean.
pub fn initialize_logger(verbose: bool) -> Result<(), AggregatorError> {
    let default_directive = if verbose {
        "code_aggregator=info"
    } else {
        "code_aggregator=warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let subscriber = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| AggregatorError::Logger(e.to_string()))
}
