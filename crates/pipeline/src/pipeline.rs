//! The FilterPipeline orchestrates multiple stages.
//!
//! This module provides the main FilterPipeline struct that chains stages
//! together using the builder pattern, plus the standard fixed-order
//! pipeline used by every record list view.

use crate::error::Result;
use crate::stages::{DateRangeStage, SearchStage, SortStage, ValueSetStage};
use crate::state::FilterState;
use crate::traits::{Filterable, Stage};
use tracing;

/// Chains stages together into a filtering pass.
///
/// A pass is a pure function of `(records, state)`: it consumes its input
/// vector and produces a new one, keeps only records every stage accepts,
/// and preserves input order unless a sort is requested. Running the same
/// pass twice on the same inputs yields the same output.
///
/// ## Usage
/// ```ignore
/// let filtered = FilterPipeline::standard().apply(orders, &state)?;
/// ```
pub struct FilterPipeline<T: Filterable> {
    stages: Vec<Box<dyn Stage<T>>>,
}

impl<T: Filterable> FilterPipeline<T> {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// The standard fixed-order pipeline: search, date range, value sets,
    /// then sort.
    ///
    /// The filter stages commute on membership since each is an independent
    /// AND-predicate over disjoint state; this order just runs the cheapest
    /// pruning first. Sort must stay last.
    pub fn standard() -> Self {
        Self::new()
            .add_stage(SearchStage)
            .add_stage(DateRangeStage)
            .add_stage(ValueSetStage)
            .add_stage(SortStage)
    }

    /// Add a stage to the pipeline (builder pattern).
    pub fn add_stage(mut self, stage: impl Stage<T> + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Apply all stages in sequence to the records.
    ///
    /// ## Algorithm
    /// 1. Start with the input records
    /// 2. For each stage in order:
    ///    a. Log stage name and input count
    ///    b. Apply the stage
    ///    c. Log output count
    /// 3. Return the final record set
    pub fn apply(&self, records: Vec<T>, state: &FilterState) -> Result<Vec<T>> {
        let mut current = records;
        for stage in &self.stages {
            tracing::debug!(
                "Applying stage: {} (input count: {})",
                stage.name(),
                current.len()
            );
            current = stage.apply(current, state)?;
            tracing::debug!(
                "Stage applied: {} (output count: {})",
                stage.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl<T: Filterable> Default for FilterPipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the standard pipeline over `records`.
///
/// Convenience entry point for callers that do not compose their own stages.
pub fn filter_records<T: Filterable>(records: Vec<T>, state: &FilterState) -> Result<Vec<T>> {
    FilterPipeline::standard().apply(records, state)
}
