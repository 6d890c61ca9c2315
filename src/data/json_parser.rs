//! JSON record loading
//!
//! Parses JSON arrays of objects into records for a [`crate::data::DataSet`].

use crate::constants::{MAX_JSON_SIZE_MB, RECORD_WRAPPER_KEYS};
use crate::data::error::{DataError, DataResult, value_kind};
use crate::types::Record;
use serde_json::Value;
use std::path::Path;

/// Parse a JSON file into records
///
/// Files larger than [`MAX_JSON_SIZE_MB`]MB return [`DataError::TooLarge`].
pub fn parse_json_file(path: &Path) -> DataResult<Vec<Record>> {
    let metadata = std::fs::metadata(path)?;
    let size_mb = metadata.len() / (1024 * 1024);
    if size_mb > MAX_JSON_SIZE_MB as u64 {
        return Err(DataError::TooLarge {
            size_mb,
            max_mb: MAX_JSON_SIZE_MB,
        });
    }

    let content = std::fs::read_to_string(path)?;
    let records = parse_records(&content)?;
    tracing::debug!(path = %path.display(), records = records.len(), "Loaded JSON records");
    Ok(records)
}

/// Parse records from JSON content
pub fn parse_records(json: &str) -> DataResult<Vec<Record>> {
    let value: Value = serde_json::from_str(json)?;
    records_from_value(value)
}

/// Convert an already parsed JSON value into records
///
/// Accepts a top-level array or an object wrapping one under a common key
/// (`data`, `rows`, `items`, `records`, `results`).
pub fn records_from_value(value: Value) -> DataResult<Vec<Record>> {
    let items = extract_array(value)?;
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(record) => Ok(record),
            _ => Err(DataError::InvalidRecord { index }),
        })
        .collect()
}

/// Extract the array from a JSON value, handling common wrapper patterns
fn extract_array(value: Value) -> DataResult<Vec<Value>> {
    match value {
        Value::Array(items) => Ok(items),
        Value::Object(mut obj) => {
            for key in RECORD_WRAPPER_KEYS {
                if let Some(Value::Array(items)) = obj.remove(key) {
                    return Ok(items);
                }
            }
            Err(DataError::NotAnArray { found: "object" })
        }
        other => Err(DataError::NotAnArray {
            found: value_kind(&other),
        }),
    }
}

/// Render records as pretty-printed JSON (array of objects)
pub fn write_records_json(records: &[Record]) -> DataResult<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
