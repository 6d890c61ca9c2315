//! Recursive structural merge of JSON option trees.

use serde_json::{Map, Value};

/// Merge `sources` left to right over a copy of `target`.
///
/// Object-valued properties merge recursively; every other value, arrays
/// included, replaces what the target held. A non-object target is returned
/// unchanged. `target` itself is never modified.
pub fn merge_deep<'a, I>(target: &Value, sources: I) -> Value
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut merged = target.clone();
    merge_deep_in_place(&mut merged, sources);
    merged
}

/// Merge `sources` into `target`, mutating it.
///
/// Callers sharing `target` with other owners should use [`merge_deep`].
pub fn merge_deep_in_place<'a, I>(target: &mut Value, sources: I)
where
    I: IntoIterator<Item = &'a Value>,
{
    for source in sources {
        merge_object(target, source);
    }
}

fn merge_object(target: &mut Value, source: &Value) {
    let (Value::Object(target_map), Value::Object(source_map)) = (target, source) else {
        return;
    };

    for (key, value) in source_map {
        if value.is_object() {
            let slot = target_map
                .entry(key.clone())
                .or_insert_with(|| Value::Object(Map::new()));
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            merge_object(slot, value);
        } else {
            target_map.insert(key.clone(), value.clone());
        }
    }
}
