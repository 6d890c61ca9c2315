//! Series-level helpers shared by rendering adapters.
//!
//! - `merge`: structural merge of option trees (objects merge, arrays replace)
//! - `visibility`: defaulting and toggling of a `visible` flag on series

mod merge;
mod visibility;

pub use merge::*;
pub use visibility::*;
