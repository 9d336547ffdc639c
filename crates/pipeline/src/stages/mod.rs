//! Stage implementations for the filtering pipeline.
//!
//! This module contains the concrete stages that can be composed into a
//! `FilterPipeline`. The standard pipeline applies them in a fixed order:
//! search, date range, value sets, then sort.

pub mod date_range;
pub mod search;
pub mod sort;
pub mod value_set;

// Re-export for convenience
pub use date_range::{DateRangeStage, parse_record_date};
pub use search::SearchStage;
pub use sort::SortStage;
pub use value_set::ValueSetStage;
