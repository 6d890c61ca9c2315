//! Unit tests for DataSet label discovery and ordering.

use crate::helpers::{records, sales_records, text_keys};
use rowset::{CategoryKey, CategorySpec, DataMapper, DataSet, LabelOrder};
use serde_json::json;
use std::collections::HashSet;

#[test]
fn test_labels_equal_distinct_category_values() {
    let rows = sales_records();
    let ds = DataSet::new(&rows, &CategorySpec::field("month"), None).unwrap();

    let distinct: HashSet<CategoryKey> = rows
        .iter()
        .map(|r| ds.category_of(r).unwrap())
        .collect();
    let labels: HashSet<CategoryKey> = ds.labels().iter().cloned().collect();

    assert_eq!(labels, distinct);
    assert_eq!(labels.len(), ds.labels().len(), "labels must not repeat");
    assert_eq!(ds.labels(), text_keys(&["Mar", "Jan", "Feb"]).as_slice());
}

#[test]
fn test_records_are_borrowed_not_copied() {
    let rows = sales_records();
    let ds = DataSet::new(&rows, &CategorySpec::field("month"), None).unwrap();
    assert!(std::ptr::eq(ds.records(), rows.as_slice()));
}

#[test]
fn test_numbers_and_numeric_text_are_distinct_labels() {
    let rows = records(json!([{"k": 1}, {"k": "1"}, {"k": 1.0}, {"k": null}, {}]));
    let ds = DataSet::new(&rows, &CategorySpec::field("k"), None).unwrap();

    assert_eq!(
        ds.labels(),
        &[
            CategoryKey::from(1_i64),
            CategoryKey::from("1"),
            CategoryKey::Null,
            CategoryKey::Undefined
        ]
    );
}

#[test]
fn test_no_spec_collapses_to_single_undefined_label() {
    let rows = sales_records();
    let ds = DataSet::new(&rows, &CategorySpec::None, None).unwrap();
    assert_eq!(ds.labels(), &[CategoryKey::Undefined]);
}

#[test]
fn test_order_by_configured_direction() {
    let rows = sales_records();
    let mut ds = DataSet::new(&rows, &CategorySpec::field("month"), None).unwrap();

    ds.order_by(LabelOrder::Desc);
    assert_eq!(ds.labels(), text_keys(&["Mar", "Jan", "Feb"]).as_slice());

    ds.order_by(LabelOrder::Asc);
    assert_eq!(ds.labels(), text_keys(&["Feb", "Jan", "Mar"]).as_slice());

    // None keeps whatever order is current
    ds.order_by(LabelOrder::None);
    assert_eq!(ds.labels(), text_keys(&["Feb", "Jan", "Mar"]).as_slice());
}

#[test]
fn test_order_with_custom_comparator() {
    let calendar = ["Jan", "Feb", "Mar"];
    let rows = sales_records();
    let mut ds = DataSet::new(&rows, &CategorySpec::field("month"), None).unwrap();

    ds.order_with(|a, b| {
        let pos = |k: &CategoryKey| calendar.iter().position(|m| k.to_string() == *m);
        pos(a).cmp(&pos(b))
    });
    assert_eq!(ds.labels(), text_keys(&calendar).as_slice());
}

#[test]
fn test_mapper_label_source_sees_mapper_shape() {
    let rows = sales_records();
    let mappers = [
        DataMapper::bar("sales").with_label("Sales"),
        DataMapper::stacked_bar("sales", "region"),
        DataMapper::line("sales").with_label("Sales"),
    ];

    // Category spec is applied to the mapper objects, not the records
    let ds = DataSet::new(&rows, &CategorySpec::field("label"), Some(&mappers[..])).unwrap();
    assert_eq!(ds.labels(), &[CategoryKey::from("Sales"), CategoryKey::Undefined]);

    let ds = DataSet::new(&rows, &CategorySpec::field("month"), Some(&mappers[..])).unwrap();
    assert_eq!(ds.labels(), &[CategoryKey::Undefined]);
}
