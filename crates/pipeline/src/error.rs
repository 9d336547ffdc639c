//! Error types for the filtering pipeline.
//!
//! Everything here is a configuration error: the caller referenced a field or
//! a value the record type does not declare. These are programmer mistakes and
//! the pipeline fails fast on them instead of silently producing a partial or
//! empty result. A filter pass that keeps zero records is not an error.

use thiserror::Error;

/// Errors raised while applying filters or deriving filter options.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// A value-set filter referenced a field the record type does not expose.
    #[error("unknown set filter field: {field}")]
    UnknownSetField { field: String },

    /// A date-range filter referenced a field the record type does not expose.
    #[error("unknown date field: {field}")]
    UnknownDateField { field: String },

    /// A sort spec referenced a field the record type does not expose.
    #[error("unknown sort field: {field}")]
    UnknownSortField { field: String },

    /// Option derivation found a value with no label/color metadata.
    #[error("no option metadata for value: {value}")]
    MissingOptionMeta { value: String },
}

/// Convenience type alias for Results in this crate.
pub type Result<T> = std::result::Result<T, PipelineError>;
