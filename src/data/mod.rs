//! Record-to-series transformation engine
//!
//! This module turns flat records plus a mapping description into ordered
//! category labels and aligned numeric series.
//!
//! ## Pipeline
//!
//! records + [`CategorySpec`] → [`DataSet`] (label discovery)
//! → [`build_row_sets`] (per-mapper dispatch) → `Vec<RowSet>`
//!
//! [`process_chart_data`] runs the whole pipeline from a [`crate::types::ChartConfig`].
//!
//! ## Error Handling
//!
//! Missing or non-numeric values never fail; they become the default value.
//! Operations that can fail return `DataResult<T>`:
//! - `Callback`: a custom category function failed
//! - `NotAnArray`/`InvalidRecord`: loader input is not an array of objects
//! - `Io`/`Json`/`TooLarge`: file loading errors

mod aggregate;
mod category;
mod chart_engine;
mod coerce;
mod dataset;
mod error;
mod json_parser;
mod provider;
mod row_set;

pub use aggregate::*;
pub use category::*;
pub use chart_engine::*;
pub use coerce::*;
pub use dataset::*;
pub use error::*;
pub use json_parser::*;
pub use provider::*;
pub use row_set::*;
