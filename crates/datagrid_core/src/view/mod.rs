//! Derived views: filter, sort and pagination.
//!
//! The view is recomputed in full from the record store whenever the
//! store, the search text or the sort key changes. There is no
//! incremental maintenance.

mod pager;
mod pipeline;

pub use pager::{PageRange, Pager};
pub use pipeline::{compare_values, matches_query, numeric_key, ViewPipeline};
