//! Data providers: value resolvers over a record and its index.
//!
//! A provider is a plain closure behind an `Arc`, so every variant shares one
//! call signature and providers stay cheap to clone into several consumers.

use crate::types::{CategoryKey, Record, join_element};
use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Resolves a value from a record and its position in the record sequence.
pub struct DataProvider<T> {
    resolve: Arc<dyn Fn(&Record, usize) -> T + Send + Sync>,
}

impl<T> DataProvider<T> {
    /// Wrap an arbitrary resolver.
    pub fn new(resolve: impl Fn(&Record, usize) -> T + Send + Sync + 'static) -> Self {
        Self {
            resolve: Arc::new(resolve),
        }
    }

    /// Resolve the value for `record` at `index`.
    pub fn get(&self, record: &Record, index: usize) -> T {
        (self.resolve)(record, index)
    }
}

impl<T> Clone for DataProvider<T> {
    fn clone(&self) -> Self {
        Self {
            resolve: Arc::clone(&self.resolve),
        }
    }
}

impl<T> fmt::Debug for DataProvider<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataProvider").finish_non_exhaustive()
    }
}

/// Value of a single field; missing fields resolve to `null`.
pub fn field(name: impl Into<String>) -> DataProvider<Value> {
    let name = name.into();
    DataProvider::new(move |record, _| record.get(&name).cloned().unwrap_or(Value::Null))
}

/// The `index`-th literal, independent of record content.
///
/// Indices past the end resolve to `null`.
pub fn values<I, V>(literals: I) -> DataProvider<Value>
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    let literals: Vec<Value> = literals.into_iter().map(Into::into).collect();
    DataProvider::new(move |_, index| literals.get(index).cloned().unwrap_or(Value::Null))
}

/// Several fields joined with `separator`. Null or missing fields render empty.
pub fn join_fields<S>(separator: impl Into<String>, names: &[S]) -> DataProvider<String>
where
    S: AsRef<str>,
{
    let separator = separator.into();
    let names: Vec<String> = names.iter().map(|n| n.as_ref().to_string()).collect();
    DataProvider::new(move |record, _| join_record_fields(record, &names, &separator))
}

/// Apply `reducer` to the values of several fields (missing fields are `null`).
pub fn combine_fields<T, S, F>(reducer: F, names: &[S]) -> DataProvider<T>
where
    S: AsRef<str>,
    F: Fn(&[Value]) -> T + Send + Sync + 'static,
{
    let names: Vec<String> = names.iter().map(|n| n.as_ref().to_string()).collect();
    DataProvider::new(move |record, _| {
        let extracted: Vec<Value> = names
            .iter()
            .map(|name| record.get(name).cloned().unwrap_or(Value::Null))
            .collect();
        reducer(&extracted)
    })
}

/// Look a field's raw value up in a static table.
///
/// The raw value is matched by its property-key rendering, so `1` and `"1"`
/// hit the same entry. Misses resolve to `null`.
pub fn map_field(name: impl Into<String>, table: IndexMap<String, Value>) -> DataProvider<Value> {
    let name = name.into();
    DataProvider::new(move |record, _| {
        let key = CategoryKey::from_value(record.get(&name)).property_key();
        table.get(&key).cloned().unwrap_or(Value::Null)
    })
}

pub(crate) fn join_record_fields(record: &Record, names: &[String], separator: &str) -> String {
    names
        .iter()
        .map(|name| record.get(name).map(join_element).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(separator)
}
