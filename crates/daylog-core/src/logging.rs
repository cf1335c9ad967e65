use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{DaylogError, Result};

/// Map a log-level name to a `tracing` filter directive.
///
/// Accepts the Python-style upper-case names (`WARNING`, `CRITICAL`) as well
/// as plain `tracing` levels. Unknown names are passed through so full
/// directives such as `daylog_data=debug` still work.
pub fn normalise_level(log_level: &str) -> String {
    let upper = log_level.to_uppercase();
    match upper.as_str() {
        "TRACE" => "trace".to_string(),
        "DEBUG" => "debug".to_string(),
        "INFO" => "info".to_string(),
        "WARN" | "WARNING" => "warn".to_string(),
        "ERROR" | "CRITICAL" => "error".to_string(),
        _ => log_level.to_string(),
    }
}

/// Install the global `tracing` subscriber, writing to stderr.
///
/// Falls back to `info` when the level cannot be parsed as a filter. Returns
/// [`DaylogError::Config`] if a global subscriber is already installed.
pub fn setup_logging(log_level: &str) -> Result<()> {
    let directive = normalise_level(log_level);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| DaylogError::Config(format!("logging already initialised: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalise_level_python_names() {
        assert_eq!(normalise_level("DEBUG"), "debug");
        assert_eq!(normalise_level("WARNING"), "warn");
        assert_eq!(normalise_level("CRITICAL"), "error");
        assert_eq!(normalise_level("info"), "info");
    }

    #[test]
    fn test_normalise_level_passes_directives_through() {
        assert_eq!(normalise_level("daylog_data=debug"), "daylog_data=debug");
    }

    #[test]
    fn test_setup_logging_second_call_errors() {
        // The first call may or may not win; the second never can.
        let _ = setup_logging("debug");
        let second = setup_logging("info");
        assert!(matches!(second, Err(DaylogError::Config(_))));
    }
}
