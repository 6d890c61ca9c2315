//! Record collection with ordered category labels.
//!
//! Labels are discovered once, at construction, in first-seen order. When
//! mappers are supplied they are the label source instead of the records:
//! each mapper is rendered as a record and handed to the category function.
//!
//! ## Ordering
//!
//! [`DataSet::order`] rewrites `labels` in place. Stacked row sets copy the
//! label order at build time, so order the labels *before* building row
//! sets; reordering afterwards leaves existing series out of step with the
//! labels. Simple row sets follow record order and never see label order.

use crate::data::category::{CategoryFn, CategorySpec, to_categories_fn};
use crate::data::error::DataResult;
use crate::types::{CategoryKey, DataMapper, LabelOrder, Record};
use indexmap::IndexSet;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

/// Records plus their resolved category function and distinct labels
#[derive(Clone)]
pub struct DataSet<'a> {
    records: &'a [Record],
    category: CategoryFn,
    labels: Vec<CategoryKey>,
}

impl<'a> DataSet<'a> {
    /// Build a dataset and discover its labels.
    ///
    /// Non-empty `mappers` replace `records` as the label source.
    pub fn new(
        records: &'a [Record],
        spec: &CategorySpec,
        mappers: Option<&[DataMapper]>,
    ) -> DataResult<Self> {
        let category = to_categories_fn(spec);
        let labels = match mappers {
            Some(mappers) if !mappers.is_empty() => {
                discover_labels(mappers.iter().map(DataMapper::to_record), &category)?
            }
            _ => discover_labels(records, &category)?,
        };

        tracing::debug!(
            records = records.len(),
            labels = labels.len(),
            from_mappers = mappers.is_some_and(|m| !m.is_empty()),
            "Discovered category labels"
        );

        Ok(Self {
            records,
            category,
            labels,
        })
    }

    pub fn records(&self) -> &'a [Record] {
        self.records
    }

    pub fn labels(&self) -> &[CategoryKey] {
        &self.labels
    }

    /// Category key of a record under this dataset's spec.
    pub fn category_of(&self, record: &Record) -> DataResult<CategoryKey> {
        (self.category)(record)
    }

    /// Sort labels with the default ordering (property keys, undefined last).
    pub fn order(&mut self) -> &mut Self {
        self.order_with(CategoryKey::default_cmp)
    }

    /// Sort labels with a caller-supplied comparator. The sort is stable.
    pub fn order_with<F>(&mut self, compare: F) -> &mut Self
    where
        F: FnMut(&CategoryKey, &CategoryKey) -> Ordering,
    {
        self.labels.sort_by(compare);
        self
    }

    /// Apply a configured label ordering.
    pub fn order_by(&mut self, order: LabelOrder) -> &mut Self {
        match order {
            LabelOrder::None => self,
            LabelOrder::Asc => self.order(),
            LabelOrder::Desc => self.order_with(|a, b| b.default_cmp(a)),
        }
    }
}

impl fmt::Debug for DataSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataSet")
            .field("records", &self.records.len())
            .field("labels", &self.labels)
            .finish_non_exhaustive()
    }
}

/// Distinct category keys of `source`, in first-seen order.
fn discover_labels<I, R>(source: I, category: &CategoryFn) -> DataResult<Vec<CategoryKey>>
where
    I: IntoIterator<Item = R>,
    R: Borrow<Record>,
{
    let mut seen = IndexSet::new();
    for item in source {
        seen.insert(category(item.borrow())?);
    }
    Ok(seen.into_iter().collect())
}
