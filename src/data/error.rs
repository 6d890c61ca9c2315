//! Error types for data operations
//!
//! The engine itself degrades silently (missing fields become default
//! values). Errors are reserved for malformed input collections, loader
//! failures, and user callbacks that fail.

use thiserror::Error;

pub use crate::constants::MAX_JSON_SIZE_MB;

/// Errors that can occur during data operations
#[derive(Error, Debug)]
pub enum DataError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Input that should hold records is not an array
    #[error("Expected an array of records, found {found}")]
    NotAnArray { found: &'static str },

    /// An element of the record array is not an object
    #[error("Record {index} is not an object")]
    InvalidRecord { index: usize },

    /// File is too large for eager loading
    #[error("File too large: {size_mb}MB (max {max_mb}MB)")]
    TooLarge { size_mb: u64, max_mb: usize },

    /// A caller-supplied category function failed
    #[error(transparent)]
    Callback(#[from] anyhow::Error),
}

/// Result type alias for data operations
pub type DataResult<T> = Result<T, DataError>;

/// Short name of a JSON value's type, for error messages
pub(crate) fn value_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
