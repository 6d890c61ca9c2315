//! Generic group-by and flatten primitives.
//!
//! Groups are returned as [`IndexMap`]s so iteration follows the order in
//! which keys were first seen. Flattening a map walks that same order, which
//! makes `group -> flatten` a stable round trip back to flat records.

use crate::types::{CategoryKey, Record};
use indexmap::IndexMap;
use serde_json::Value;
use std::hash::Hash;

/// Reduce `items` into per-key accumulators.
///
/// `initial` seeds a fresh accumulator the first time a key is seen, so no
/// seed is ever shared between keys. `combiner` runs for every item,
/// including the first one of each key.
pub fn group_by<T, K, A, I, KF, IF, CF>(
    items: I,
    mut key_fn: KF,
    mut initial: IF,
    mut combiner: CF,
) -> IndexMap<K, A>
where
    I: IntoIterator<Item = T>,
    K: Hash + Eq,
    KF: FnMut(&T) -> K,
    IF: FnMut() -> A,
    CF: FnMut(&mut A, T),
{
    let mut groups = IndexMap::new();
    for item in items {
        let key = key_fn(&item);
        let acc = groups.entry(key).or_insert_with(&mut initial);
        combiner(acc, item);
    }
    groups
}

/// Collect items into per-key lists.
pub fn group_by_key<T, K, I, KF>(items: I, key_fn: KF) -> IndexMap<K, Vec<T>>
where
    I: IntoIterator<Item = T>,
    K: Hash + Eq,
    KF: FnMut(&T) -> K,
{
    group_by(items, key_fn, Vec::new, |list, item| list.push(item))
}

/// Collect records into per-value lists of a single field.
pub fn group_by_field<'a, I>(items: I, field: &str) -> IndexMap<CategoryKey, Vec<&'a Record>>
where
    I: IntoIterator<Item = &'a Record>,
{
    group_by_key(items, |record: &&'a Record| CategoryKey::from_value(record.get(field)))
}

/// Sum `value_fn` over items sharing a key.
pub fn sum_by_key<T, K, I, KF, VF>(items: I, key_fn: KF, mut value_fn: VF) -> IndexMap<K, f64>
where
    I: IntoIterator<Item = T>,
    K: Hash + Eq,
    KF: FnMut(&T) -> K,
    VF: FnMut(&T) -> f64,
{
    group_by(items, key_fn, || 0.0, |acc, item| *acc += value_fn(&item))
}

/// Map every entry of `map`, in insertion order.
pub fn flatten_entries<K, V, R, F>(map: &IndexMap<K, V>, mut mapper: F) -> Vec<R>
where
    F: FnMut(&K, &V) -> R,
{
    map.iter().map(|(key, value)| mapper(key, value)).collect()
}

/// Reshape entries into records `{key_name: key, value_name: value_fn(value)}`.
pub fn flatten_entries_by_fn<K, V, F>(
    map: &IndexMap<K, V>,
    key_name: &str,
    value_name: &str,
    mut value_fn: F,
) -> Vec<Record>
where
    K: Clone + Into<Value>,
    F: FnMut(&V) -> Value,
{
    flatten_entries(map, |key, value| {
        let mut record = Record::new();
        record.insert(key_name.to_string(), key.clone().into());
        record.insert(value_name.to_string(), value_fn(value));
        record
    })
}

/// Reshape entries into records `{key_name: key, value_name: value}`.
pub fn flatten_entries_by_field<K, V>(
    map: &IndexMap<K, V>,
    key_name: &str,
    value_name: &str,
) -> Vec<Record>
where
    K: Clone + Into<Value>,
    V: Clone + Into<Value>,
{
    flatten_entries_by_fn(map, key_name, value_name, |value| value.clone().into())
}
