//! Chart data processing engine
//!
//! Runs the whole pipeline for a declarative [`ChartConfig`]: label
//! discovery, label ordering, then row-set construction. Ordering is applied
//! before any series is built so stacked series line up with the labels.

use crate::data::dataset::DataSet;
use crate::data::error::DataResult;
use crate::data::row_set::build_row_sets;
use crate::series::get_visible_series;
use crate::types::{CategoryKey, ChartConfig, LabelSource, Record, RowSet};
use serde::Serialize;

/// Processed chart data ready for a rendering adapter
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    /// Category labels along the shared axis
    pub labels: Vec<CategoryKey>,
    /// One entry per renderable series
    pub row_sets: Vec<RowSet>,
}

impl ChartData {
    /// Row sets not explicitly hidden
    pub fn visible_row_sets(&self) -> Vec<RowSet> {
        get_visible_series(&self.row_sets)
    }
}

impl ChartConfig {
    /// Parse a mapping description from JSON.
    pub fn from_json(json: &str) -> DataResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Process records into chart-ready labels and series
///
/// This performs:
/// 1. Label discovery over the configured label source
/// 2. Label ordering
/// 3. Row-set construction for every mapper
pub fn process_chart_data(records: &[Record], config: &ChartConfig) -> DataResult<ChartData> {
    let label_mappers = match config.label_source {
        LabelSource::Records => None,
        LabelSource::Mappers => Some(config.mappers.as_slice()),
    };

    let mut dataset = DataSet::new(records, &config.category, label_mappers)?;
    dataset.order_by(config.label_order);

    let row_sets = build_row_sets(&dataset, &config.mappers, config.default_value)?;

    Ok(ChartData {
        labels: dataset.labels().to_vec(),
        row_sets,
    })
}
