//! Sort stage, always last in the standard pipeline.
//!
//! The sort must be stable: records with equal keys keep their input order,
//! so repeated passes over the same data never shuffle ties. Descending
//! order reverses the comparator rather than the output, which preserves
//! that guarantee.

use crate::error::{PipelineError, Result};
use crate::state::{FilterState, SortDirection};
use crate::traits::{Filterable, Stage};

/// Orders records by the requested field.
///
/// ## Algorithm
/// 1. No sort spec keeps input order
/// 2. Resolve the sort key for every record up front, so an unknown field
///    fails the whole pass before anything is reordered
/// 3. Stable-sort on the resolved keys
pub struct SortStage;

impl<T: Filterable> Stage<T> for SortStage {
    fn name(&self) -> &str {
        "SortStage"
    }

    fn apply(&self, records: Vec<T>, state: &FilterState) -> Result<Vec<T>> {
        let Some(spec) = &state.sort else {
            return Ok(records);
        };

        let mut keyed = Vec::with_capacity(records.len());
        for record in records {
            let key = record
                .sort_key(&spec.field)
                .ok_or_else(|| PipelineError::UnknownSortField {
                    field: spec.field.clone(),
                })?;
            keyed.push((key, record));
        }

        keyed.sort_by(|a, b| match spec.direction {
            SortDirection::Asc => a.0.compare(&b.0),
            SortDirection::Desc => b.0.compare(&a.0),
        });

        Ok(keyed.into_iter().map(|(_, record)| record).collect())
    }
}
