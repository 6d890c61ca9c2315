//! Regression tests for label ordering versus series alignment.
//!
//! Stacked series are aligned to the labels at build time; simple series are
//! aligned to record order and ignore label ordering entirely.

use crate::helpers::{assert_aligned, row_set_named, sales_records, text_keys};
use rowset::{CategoryKey, CategorySpec, DataMapper, DataSet, build_row_sets};

#[test]
fn test_order_before_build_keeps_series_aligned() {
    let records = sales_records();
    let mut ds = DataSet::new(&records, &CategorySpec::field("month"), None).unwrap();
    ds.order();

    let row_sets = build_row_sets(&ds, &[DataMapper::stacked_bar("sales", "region")], None).unwrap();
    assert_eq!(ds.labels(), text_keys(&["Feb", "Jan", "Mar"]).as_slice());

    for row_set in &row_sets {
        assert_aligned(row_set, ds.labels());
    }
    let north = row_set_named(&row_sets, "North");
    assert_eq!(north.data, vec![None, Some(10.0), Some(30.0)]);
}

#[test]
fn test_order_after_build_does_not_reorder_existing_series() {
    let records = sales_records();
    let mut ds = DataSet::new(&records, &CategorySpec::field("month"), None).unwrap();
    let row_sets = build_row_sets(&ds, &[DataMapper::stacked_bar("sales", "region")], None).unwrap();

    ds.order();

    // data still follows the discovery order Mar, Jan, Feb
    let north = row_set_named(&row_sets, "North");
    assert_eq!(north.data, vec![Some(30.0), Some(10.0), None]);
    assert_eq!(ds.labels()[0], CategoryKey::from("Feb"));
}

#[test]
fn test_simple_series_ignore_label_order() {
    let records = sales_records();
    let mapper = DataMapper::bar("sales");

    let unordered = DataSet::new(&records, &CategorySpec::field("month"), None).unwrap();
    let before = build_row_sets(&unordered, &[mapper.clone()], None).unwrap();

    let mut ordered = DataSet::new(&records, &CategorySpec::field("month"), None).unwrap();
    ordered.order_with(|a, b| b.default_cmp(a));
    let after = build_row_sets(&ordered, &[mapper], None).unwrap();

    assert_eq!(before[0].data, after[0].data);
    assert_eq!(after[0].data.len(), records.len());
    assert_ne!(after[0].data.len(), ordered.labels().len());
}
