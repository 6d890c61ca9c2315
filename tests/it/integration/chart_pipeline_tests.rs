//! End-to-end pipeline tests.

use crate::helpers::{assert_aligned, init_tracing, row_set_named, sales_records, text_keys};
use rowset::data::parse_records;
use rowset::{
    CategoryKey, CategorySpec, ChartConfig, DataError, DataMapper, LabelOrder, LabelSource,
    merge_deep, process_chart_data, toggle_series_visibility,
};
use serde_json::json;

#[test]
fn test_json_payload_to_chart_data() {
    init_tracing();
    let records = parse_records(
        r#"{"data": [
            {"day": "Tue", "browser": "Firefox", "visits": 12},
            {"day": "Mon", "browser": "Chrome", "visits": "40"},
            {"day": "Mon", "browser": "Firefox", "visits": 9},
            {"day": "Tue", "browser": "Chrome", "visits": null}
        ]}"#,
    )
    .unwrap();

    let config = ChartConfig::from_json(
        r#"{
            "category": "day",
            "mappers": [
                {"field": "visits", "multiField": "browser"},
                {"field": "visits", "label": "All visits"}
            ],
            "defaultValue": 0,
            "labelOrder": "asc"
        }"#,
    )
    .unwrap();

    let chart = process_chart_data(&records, &config).unwrap();
    assert_eq!(chart.labels, text_keys(&["Mon", "Tue"]));
    assert_eq!(chart.row_sets.len(), 3);

    let firefox = row_set_named(&chart.row_sets, "Firefox");
    assert_aligned(firefox, &chart.labels);
    assert_eq!(firefox.data, vec![Some(9.0), Some(12.0)]);

    // null is a valid slot and survives the default
    let chrome = row_set_named(&chart.row_sets, "Chrome");
    assert_eq!(chrome.data, vec![Some(40.0), None]);

    // simple series follow record order, not label order
    let all = row_set_named(&chart.row_sets, "All visits");
    assert_eq!(all.data, vec![Some(12.0), Some(40.0), Some(9.0), None]);
}

#[test]
fn test_joined_category_fields() {
    let records = sales_records();
    let config = ChartConfig::new(CategorySpec::fields(&["region", "month"]))
        .with_mapper(DataMapper::line("sales").with_label("Sales"));

    let chart = process_chart_data(&records, &config).unwrap();
    assert_eq!(chart.labels.len(), 5);
    assert_eq!(chart.labels[0], CategoryKey::from("North_Mar"));
}

#[test]
fn test_mapper_label_source() {
    let records = sales_records();
    let config = ChartConfig::new(CategorySpec::field("label"))
        .with_mapper(DataMapper::pie("sales").with_label("Sales"))
        .with_label_source(LabelSource::Mappers);

    let chart = process_chart_data(&records, &config).unwrap();
    assert_eq!(chart.labels, text_keys(&["Sales"]));
    // the simple series still covers every record
    assert_eq!(chart.row_sets[0].data.len(), records.len());
}

#[test]
fn test_failing_category_function_propagates() {
    let records = sales_records();
    let config = ChartConfig::new(CategorySpec::try_custom(|record| {
        match record.get("month").and_then(|m| m.as_str()) {
            Some("Feb") => anyhow::bail!("February is not supported"),
            other => Ok(CategoryKey::from(other.unwrap_or_default())),
        }
    }))
    .with_mapper(DataMapper::bar("sales"));

    let err = process_chart_data(&records, &config).unwrap_err();
    assert!(matches!(err, DataError::Callback(_)));
    assert_eq!(err.to_string(), "February is not supported");
}

#[test]
fn test_visibility_and_options_for_adapter() {
    let records = sales_records();
    let config = ChartConfig::new(CategorySpec::field("month"))
        .with_mapper(DataMapper::stacked_bar("sales", "region"))
        .with_label_order(LabelOrder::Asc);

    let mut chart = process_chart_data(&records, &config).unwrap();
    chart.row_sets = toggle_series_visibility(&chart.row_sets, 0);
    let visible = chart.visible_row_sets();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name.as_deref(), Some("South"));

    let defaults = json!({"chart": {"stacked": false}, "colors": ["#111", "#222"]});
    let options = merge_deep(
        &defaults,
        [&json!({
            "chart": {"stacked": true},
            "colors": ["#333"],
            "xaxis": {"categories": chart.labels}
        })],
    );
    assert_eq!(
        options,
        json!({
            "chart": {"stacked": true},
            "colors": ["#333"],
            "xaxis": {"categories": ["Feb", "Jan", "Mar"]}
        })
    );
}
