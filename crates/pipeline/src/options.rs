//! Filter option derivation and filter control declarations.
//!
//! Filter UIs are described as data: an ordered list of [`FilterControl`]
//! values, one per control, with multi-select controls carrying the
//! [`FilterOption`] list derived from the domain's enumerated values and
//! their label/color metadata.

use crate::error::{PipelineError, Result};

/// One selectable option of a multi-select filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    /// Stable value identifier, matched against record field values.
    pub id: String,
    /// Human-readable label.
    pub label: String,
    /// Optional display color token; opaque to the pipeline.
    pub color: Option<String>,
}

/// Label/color metadata for one enumerated value.
#[derive(Debug, Clone, Copy)]
pub struct OptionMeta {
    pub label: &'static str,
    pub color: Option<&'static str>,
}

/// Build the option list for an enumerated filter field.
///
/// Produces one option per input value, preserving input order. A value with
/// no metadata entry is a configuration error (a status was added to the
/// domain without its display metadata) and aborts derivation rather than
/// silently yielding a partial list.
pub fn derive_options(values: &[&str], meta: &[(&str, OptionMeta)]) -> Result<Vec<FilterOption>> {
    let mut options = Vec::with_capacity(values.len());
    for value in values {
        let (_, m) = meta
            .iter()
            .find(|(v, _)| v == value)
            .ok_or_else(|| PipelineError::MissingOptionMeta {
                value: value.to_string(),
            })?;
        options.push(FilterOption {
            id: value.to_string(),
            label: m.label.to_string(),
            color: m.color.map(str::to_string),
        });
    }
    Ok(options)
}

/// A declarative description of one filter control.
///
/// One variant per control kind, so a frontend can render a filter bar from
/// the list alone and the field keys line up with [`crate::FilterState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterControl {
    /// Free-text search box feeding `FilterState::search_query`.
    Search { placeholder: String },
    /// Date-window picker feeding `FilterState::date_range` for `field`.
    DateRange { field: String, label: String },
    /// Multi-select feeding `FilterState::set_filters[field]`.
    MultiSelect {
        field: String,
        label: String,
        options: Vec<FilterOption>,
    },
}
