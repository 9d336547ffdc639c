//! Multi-value-set stage.
//!
//! One stage handles every declared set filter: each field with a non-empty
//! selected set keeps only records whose field value is a member of that set.
//! Fields with an empty (or absent) set impose no constraint at all, so
//! deselecting the last value of a filter shows everything again rather
//! than nothing.

use crate::error::{PipelineError, Result};
use crate::state::FilterState;
use crate::traits::{Filterable, Stage};

/// Keeps records whose set-filter fields match the selected values.
///
/// ## Algorithm
/// For each field in declared order:
/// 1. Skip the field if nothing is selected for it (vacuous)
/// 2. Otherwise resolve the record's value (unknown field is a configuration
///    error) and keep the record only if the value is selected
///
/// The per-field passes are independent AND-predicates, so their order
/// affects performance only, never membership.
pub struct ValueSetStage;

impl<T: Filterable> Stage<T> for ValueSetStage {
    fn name(&self) -> &str {
        "ValueSetStage"
    }

    fn apply(&self, records: Vec<T>, state: &FilterState) -> Result<Vec<T>> {
        let mut current = records;
        for (field, selected) in &state.set_filters {
            if selected.is_empty() {
                continue;
            }
            let mut kept = Vec::with_capacity(current.len());
            for record in current {
                let value = record
                    .set_field(field)
                    .ok_or_else(|| PipelineError::UnknownSetField {
                        field: field.clone(),
                    })?;
                let keep = selected.contains(value);
                if keep {
                    kept.push(record);
                }
            }
            current = kept;
        }
        Ok(current)
    }
}
