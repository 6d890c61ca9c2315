//! Row-set construction.
//!
//! Each mapper yields one or more [`RowSet`]s depending on its kind:
//!
//! - **Simple** mappers produce a single series aligned to record order.
//! - **Stacked/multi** mappers produce one series per distinct value of the
//!   splitting field, aligned to [`DataSet::labels`].
//!
//! The two alignments differ on purpose: label ordering never affects simple
//! series.

use crate::constants::UNDEFINED_KEY;
use crate::data::aggregate::group_by;
use crate::data::category::{CategorySpec, to_categories_fn};
use crate::data::coerce::{numeric_slot, slot_or};
use crate::data::dataset::DataSet;
use crate::data::error::{DataError, DataResult};
use crate::types::{CategoryKey, DataMapper, Record, RowSet};
use serde_json::Value;
use std::collections::HashMap;

/// Build row sets for every mapper, preserving mapper order.
pub fn build_row_sets(
    dataset: &DataSet<'_>,
    mappers: &[DataMapper],
    default_value: Option<f64>,
) -> DataResult<Vec<RowSet>> {
    let mut row_sets = Vec::with_capacity(mappers.len());
    for mapper in mappers {
        match mapper.kind.row_key_field() {
            Some(row_key_field) => {
                tracing::trace!(field = %mapper.field, split_by = row_key_field, "Building stacked row sets");
                row_sets.extend(stacked_data(dataset, mapper, row_key_field, default_value)?);
            }
            None => {
                tracing::trace!(field = %mapper.field, "Building simple row set");
                row_sets.push(simple_data(dataset, mapper, default_value));
            }
        }
    }

    tracing::debug!(
        mappers = mappers.len(),
        row_sets = row_sets.len(),
        "Built row sets"
    );
    Ok(row_sets)
}

/// One series over the records in their original order.
pub fn simple_data(dataset: &DataSet<'_>, mapper: &DataMapper, default_value: Option<f64>) -> RowSet {
    let data = dataset
        .records()
        .iter()
        .map(|record| slot_or(record.get(&mapper.field), default_value))
        .collect();

    RowSet {
        name: mapper.label.clone(),
        group: mapper.group.clone(),
        data,
        mapper: mapper.clone(),
        visible: None,
    }
}

/// Values seen for one splitting key
#[derive(Default)]
struct Bucket {
    /// Raw value per category property key; last write wins
    values: HashMap<String, Option<Value>>,
    group: Option<Value>,
}

/// One series per distinct value of `row_key_field`, aligned to the labels.
///
/// Series are keyed by the property key of the splitting value, so `1` and
/// `"1"` land in the same series. Records sharing both the splitting key and
/// the category overwrite each other; nothing is summed.
///
/// The group of a series is taken from the last record in its bucket and is
/// held apart from the per-category values. A category named `"group"`
/// therefore reads its own value, never the group.
pub fn stacked_data(
    dataset: &DataSet<'_>,
    mapper: &DataMapper,
    row_key_field: &str,
    default_value: Option<f64>,
) -> DataResult<Vec<RowSet>> {
    let row_key = to_categories_fn(&CategorySpec::field(row_key_field));
    // An absent mapper group still indexes the record, under "undefined"
    let group_field = mapper.group.as_deref().unwrap_or(UNDEFINED_KEY);

    let keyed = dataset
        .records()
        .iter()
        .map(|record| {
            Ok::<_, DataError>((
                row_key(record)?.property_key(),
                dataset.category_of(record)?,
                record,
            ))
        })
        .collect::<DataResult<Vec<(String, CategoryKey, &Record)>>>()?;

    let buckets = group_by(
        keyed,
        |(row, _, _)| row.clone(),
        Bucket::default,
        |bucket, (_, category, record)| {
            bucket
                .values
                .insert(category.property_key(), record.get(&mapper.field).cloned());
            bucket.group = record.get(group_field).cloned();
        },
    );

    let row_sets = buckets
        .into_iter()
        .map(|(row, bucket)| {
            let data = dataset
                .labels()
                .iter()
                .map(|label| {
                    let raw = bucket.values.get(&label.property_key()).and_then(Option::as_ref);
                    numeric_slot(raw).unwrap_or(default_value)
                })
                .collect();

            RowSet {
                name: Some(row),
                group: bucket
                    .group
                    .filter(|g| !g.is_null())
                    .map(|g| CategoryKey::from_value(Some(&g)).property_key()),
                data,
                mapper: mapper.clone(),
                visible: None,
            }
        })
        .collect();

    Ok(row_sets)
}
