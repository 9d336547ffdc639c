//! Generic filtering/search pipeline for record list views.
//!
//! This crate provides:
//! - `Filterable` and `Stage` traits for composable record filtering
//! - `FilterState` describing the active search/date/set/sort criteria
//! - `FilterPipeline` for composing stages, plus the standard fixed order
//! - Filter option derivation and declarative filter controls
//!
//! ## Architecture
//! A filtering pass processes records in stages:
//! 1. Free-text search over each record's projected strings
//! 2. Inclusive date-range check on one declared date field
//! 3. Per-field value-set membership (empty selection = no constraint)
//! 4. Stable sort, when an ordering is requested
//!
//! Every pass is a pure function of `(records, state)`: unset criteria match
//! everything, output is always a subset of input in input order unless
//! sorted, and re-running the pass changes nothing. The caller owns the
//! state, mutates it one criterion at a time, and decides when to recompute;
//! purity makes memoizing on `(records, state)` safe.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterState, SortDirection, filter_records};
//!
//! let mut state = FilterState::new();
//! state.set_search("ord");
//! state.toggle_value("status", "ordered");
//! state.set_sort("total", SortDirection::Desc);
//!
//! let filtered = filter_records(orders, &state)?;
//! ```

pub mod error;
pub mod options;
pub mod pipeline;
pub mod stages;
pub mod state;
pub mod traits;

// Re-export main types
pub use error::{PipelineError, Result};
pub use options::{FilterControl, FilterOption, OptionMeta, derive_options};
pub use pipeline::{FilterPipeline, filter_records};
pub use stages::parse_record_date;
pub use state::{DateRange, FilterState, SortDirection, SortSpec};
pub use traits::{Filterable, SortKey, Stage};
