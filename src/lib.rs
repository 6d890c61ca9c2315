//! Chart-library-agnostic transformation of flat records into categorical
//! series.
//!
//! Given records (plain key/value objects) and a declarative mapping, the
//! crate derives an ordered set of category labels and one or more aligned
//! numeric series ([`RowSet`]s) that a rendering adapter can hand to any
//! charting library.
//!
//! ```ignore
//! use rowset::{CategorySpec, ChartConfig, DataMapper, LabelOrder, process_chart_data};
//!
//! let config = ChartConfig::new(CategorySpec::field("month"))
//!     .with_mapper(DataMapper::stacked_bar("sales", "region"))
//!     .with_label_order(LabelOrder::Asc);
//! let chart = process_chart_data(&records, &config)?;
//! ```

pub mod constants;
pub mod data;
pub mod series;
pub mod types;

pub use data::{
    CategorySpec, ChartData, DataError, DataProvider, DataResult, DataSet, build_row_sets,
    process_chart_data,
};
pub use series::{
    SeriesVisibility, get_visible_series, merge_deep, merge_deep_in_place,
    process_series_visibility, toggle_series_visibility, update_series_visibility,
};
pub use types::{
    CategoryKey, ChartConfig, DataMapper, LabelOrder, LabelSource, MapperKind, Record, RowSet,
};
