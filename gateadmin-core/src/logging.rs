use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event, fields flattened.
    Json,
    /// Human-readable multi-line output.
    Pretty,
}

pub fn default_log_format() -> LogFormat {
    if io::stdout().is_terminal() {
        LogFormat::Pretty
    } else {
        LogFormat::Json
    }
}

/// Install the global subscriber.
///
/// - Filtering comes from `RUST_LOG` (defaults to "info" if not set)
/// - JSON output unless stdout is a terminal
///
/// Does nothing if a global subscriber is already installed.
pub fn init_logging() {
    let _ = try_init_logging(default_log_format());
}

pub fn try_init_logging(
    format: LogFormat,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        LogFormat::Json => fmt()
            .with_env_filter(filter)
            .json()
            .flatten_event(true)
            .try_init(),
        LogFormat::Pretty => fmt().with_env_filter(filter).pretty().try_init(),
    }
}

#[cfg(test)]
mod tests;
