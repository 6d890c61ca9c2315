//! Visibility flags on series-like entities.
//!
//! A series without an explicit `visible` flag counts as visible. All helpers
//! return new vectors and leave their input untouched.

use crate::constants::DEFAULT_VISIBLE;
use crate::types::{Record, RowSet};
use serde_json::Value;

/// Anything carrying an optional `visible` flag
pub trait SeriesVisibility {
    /// The explicit flag, if one is set
    fn visible(&self) -> Option<bool>;

    fn set_visible(&mut self, visible: bool);

    /// Only an explicit `false` hides a series.
    fn is_visible(&self) -> bool {
        self.visible().unwrap_or(DEFAULT_VISIBLE)
    }
}

impl SeriesVisibility for RowSet {
    fn visible(&self) -> Option<bool> {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = Some(visible);
    }
}

impl SeriesVisibility for Record {
    fn visible(&self) -> Option<bool> {
        self.get("visible").and_then(Value::as_bool)
    }

    fn set_visible(&mut self, visible: bool) {
        self.insert("visible".to_string(), Value::Bool(visible));
    }
}

/// Non-object values carry no flag and ignore updates.
impl SeriesVisibility for Value {
    fn visible(&self) -> Option<bool> {
        self.as_object().and_then(|map| map.visible())
    }

    fn set_visible(&mut self, visible: bool) {
        if let Some(map) = self.as_object_mut() {
            map.set_visible(visible);
        }
    }
}

/// Series whose flag is not explicitly `false`.
pub fn get_visible_series<T>(series: &[T]) -> Vec<T>
where
    T: SeriesVisibility + Clone,
{
    series.iter().filter(|s| s.is_visible()).cloned().collect()
}

/// Copy of `series` where every entry carries an explicit flag.
pub fn process_series_visibility<T>(series: &[T]) -> Vec<T>
where
    T: SeriesVisibility + Clone,
{
    series
        .iter()
        .map(|s| {
            let mut entry = s.clone();
            let visible = entry.is_visible();
            entry.set_visible(visible);
            entry
        })
        .collect()
}

/// Copy of `series` with the entry at `index` set to `visible`.
///
/// An out-of-range index logs a warning and returns an unchanged copy.
pub fn update_series_visibility<T>(series: &[T], index: usize, visible: bool) -> Vec<T>
where
    T: SeriesVisibility + Clone,
{
    let mut updated = series.to_vec();
    match updated.get_mut(index) {
        Some(entry) => entry.set_visible(visible),
        None => tracing::warn!(
            index,
            len = series.len(),
            "Series index out of range, visibility unchanged"
        ),
    }
    updated
}

/// Copy of `series` with the entry at `index` flipped.
pub fn toggle_series_visibility<T>(series: &[T], index: usize) -> Vec<T>
where
    T: SeriesVisibility + Clone,
{
    match series.get(index) {
        Some(entry) => update_series_visibility(series, index, !entry.is_visible()),
        None => update_series_visibility(series, index, DEFAULT_VISIBLE),
    }
}
