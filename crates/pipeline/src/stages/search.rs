//! Free-text search stage.
//!
//! This is the first stage in the standard pipeline: it is the cheapest to
//! evaluate and usually prunes the most records when a query is active.

use crate::error::Result;
use crate::state::FilterState;
use crate::traits::{Filterable, Stage};

/// Keeps records whose search projection contains the query.
///
/// ## Algorithm
/// 1. A blank (empty or whitespace-only) query keeps every record
/// 2. Otherwise lowercase the query once, lowercase each projected string,
///    and keep the record on the first substring hit
///
/// Matching is plain substring, not tokenized or fuzzy, so results are easy
/// to predict from the query.
pub struct SearchStage;

impl<T: Filterable> Stage<T> for SearchStage {
    fn name(&self) -> &str {
        "SearchStage"
    }

    fn apply(&self, records: Vec<T>, state: &FilterState) -> Result<Vec<T>> {
        if state.search_query.trim().is_empty() {
            return Ok(records);
        }

        let needle = state.search_query.to_lowercase();
        let filtered: Vec<T> = records
            .into_iter()
            .filter(|record| {
                record
                    .search_haystack()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            })
            .collect();

        Ok(filtered)
    }
}
