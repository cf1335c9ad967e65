use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the daily event analyzer.
#[derive(Error, Debug)]
pub enum DaylogError {
    /// A date string or year/month/day triple is not a valid calendar date.
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    /// A time-of-day string is not a valid `HHMM` value.
    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    /// A line of a day file could not be parsed as an event record.
    #[error("Failed to parse event record at {path}:{line}: {source}")]
    RecordParse {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A day file exists but could not be opened or read.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON document (e.g. the settings file) could not be parsed.
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DaylogError {
    /// `true` for malformed dates, malformed times and unparsable record lines.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            DaylogError::InvalidDate(_)
                | DaylogError::InvalidTime(_)
                | DaylogError::RecordParse { .. }
        )
    }
}

/// Convenience alias used throughout the daylog crates.
pub type Result<T> = std::result::Result<T, DaylogError>;
