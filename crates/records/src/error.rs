//! Error types for the records crate.

use thiserror::Error;

/// Errors that can occur while loading and validating record files.
#[derive(Error, Debug)]
pub enum RecordError {
    /// I/O error while reading a data file
    #[error("I/O error reading {file}: {source}")]
    Io {
        file: String,
        source: std::io::Error,
    },

    /// A data file is not valid JSON for the expected shape
    #[error("Parse error in {file}: {source}")]
    Json {
        file: String,
        source: serde_json::Error,
    },

    /// A record field had a value outside the known vocabulary
    #[error("Invalid value for {field} in {file} record {record}: {value}")]
    InvalidValue {
        file: String,
        record: usize,
        field: String,
        value: String,
    },

    /// Data validation failed after load
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Convenience type alias for Results in this crate.
pub type Result<T> = std::result::Result<T, RecordError>;
