//! Unit tests for merge and visibility utilities.

use crate::helpers::{init_tracing, record, sales_records};
use rowset::{
    CategorySpec, DataMapper, DataSet, Record, RowSet, SeriesVisibility, build_row_sets,
    get_visible_series, merge_deep, merge_deep_in_place, process_series_visibility,
    toggle_series_visibility, update_series_visibility,
};
use serde_json::json;

fn sample_row_sets() -> Vec<RowSet> {
    let rows = sales_records();
    let ds = DataSet::new(&rows, &CategorySpec::field("month"), None).unwrap();
    build_row_sets(&ds, &[DataMapper::stacked_bar("sales", "region")], None).unwrap()
}

// ============================================================================
// Merge
// ============================================================================

#[test]
fn test_merge_deep_objects_merge_arrays_replace() {
    assert_eq!(
        merge_deep(&json!({"a": {"x": 1}}), [&json!({"a": {"y": 2}})]),
        json!({"a": {"x": 1, "y": 2}})
    );
    assert_eq!(
        merge_deep(&json!({"a": [1, 2]}), [&json!({"a": [3]})]),
        json!({"a": [3]})
    );
}

#[test]
fn test_merge_deep_leaves_target_untouched() {
    let defaults = json!({"chart": {"type": "bar", "stacked": false}});
    let overrides = json!({"chart": {"stacked": true}});

    let merged = merge_deep(&defaults, [&overrides]);

    assert_eq!(merged, json!({"chart": {"type": "bar", "stacked": true}}));
    assert_eq!(defaults, json!({"chart": {"type": "bar", "stacked": false}}));
}

#[test]
fn test_merge_deep_in_place_mutates_shared_target() {
    let mut options = json!({"xaxis": {"categories": ["a", "b"]}});
    merge_deep_in_place(
        &mut options,
        [&json!({"xaxis": {"categories": ["c"]}}), &json!({"yaxis": {"min": 0}})],
    );
    assert_eq!(
        options,
        json!({"xaxis": {"categories": ["c"]}, "yaxis": {"min": 0}})
    );
}

#[test]
fn test_merge_deep_without_sources_is_a_copy() {
    let target = json!({"a": 1});
    assert_eq!(merge_deep(&target, []), target);
}

// ============================================================================
// Visibility
// ============================================================================

#[test]
fn test_get_visible_series_on_json() {
    let series = vec![json!({}), json!({"visible": false}), json!({"visible": true})];
    assert_eq!(
        get_visible_series(&series),
        vec![json!({}), json!({"visible": true})]
    );
}

#[test]
fn test_toggle_series_visibility() {
    let series = vec![json!({"visible": true}), json!({"visible": false})];
    assert_eq!(
        toggle_series_visibility(&series, 1),
        vec![json!({"visible": true}), json!({"visible": true})]
    );
    assert_eq!(
        toggle_series_visibility(&series, 0),
        vec![json!({"visible": false}), json!({"visible": false})]
    );
}

#[test]
fn test_out_of_range_index_returns_input_values() {
    init_tracing();
    let series = vec![json!({"visible": true}), json!({"visible": false})];
    assert_eq!(toggle_series_visibility(&series, 5), series);
    assert_eq!(update_series_visibility(&series, 5, true), series);
}

#[test]
fn test_row_set_visibility_round_trip() {
    let row_sets = sample_row_sets();
    assert!(row_sets.iter().all(|r| r.visible.is_none()));

    let processed = process_series_visibility(&row_sets);
    assert!(processed.iter().all(|r| r.visible == Some(true)));

    let hidden = update_series_visibility(&processed, 0, false);
    assert_eq!(hidden[0].visible, Some(false));
    assert_eq!(hidden[1].visible, Some(true));
    assert_eq!(processed[0].visible, Some(true), "input must not change");

    let visible = get_visible_series(&hidden);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name.as_deref(), Some("South"));
}

#[test]
fn test_record_visibility() {
    let mut r: Record = record(json!({"name": "a", "visible": "no"}));
    // Only a boolean flag counts
    assert!(r.is_visible());
    r.set_visible(false);
    assert_eq!(r.visible(), Some(false));
}

#[test]
fn test_non_object_values_ignore_updates() {
    let series = vec![json!(1), json!({"visible": false})];
    let updated = update_series_visibility(&series, 0, false);
    assert_eq!(updated[0], json!(1));
    assert_eq!(get_visible_series(&updated).len(), 1);
}
