//! Crate-wide constants.
//!
//! Centralizes separators, wrapper keys and limits so the engine and its
//! loaders agree on them.

// ============================================================================
// Category Resolution
// ============================================================================

/// Separator used when a category is built from several fields
pub const CATEGORY_JOIN_SEPARATOR: &str = "_";

/// Property name rendered for an undefined key (matches plain object indexing)
pub const UNDEFINED_KEY: &str = "undefined";

/// Property name rendered for a null key
pub const NULL_KEY: &str = "null";

// ============================================================================
// Series Defaults
// ============================================================================

/// Value emitted for slots without a valid number unless the caller overrides it
pub const DEFAULT_VALUE: Option<f64> = None;

/// Visibility assumed for series that carry no explicit flag
pub const DEFAULT_VISIBLE: bool = true;

// ============================================================================
// Record Loading
// ============================================================================

/// Object keys that commonly wrap a record array in JSON payloads
pub const RECORD_WRAPPER_KEYS: [&str; 5] = ["data", "rows", "items", "records", "results"];

/// Maximum JSON file size (in MB) accepted by the eager loader
pub const MAX_JSON_SIZE_MB: usize = 100;
