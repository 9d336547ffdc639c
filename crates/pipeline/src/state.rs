//! Caller-owned filter state.
//!
//! A `FilterState` describes the currently active search, date-range,
//! value-set and sort criteria. It starts out all-vacuous and is mutated one
//! criterion at a time by the owning UI or CLI layer; the pipeline itself only
//! ever reads it. Every unset criterion matches all records rather than none.

use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

/// Sort direction for a [`SortSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Which field to sort by, and in which direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

/// An inclusive date window applied to one date field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    /// Key of the record date field the range applies to.
    pub field: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// The full set of active filter criteria.
///
/// BTree collections keep iteration order deterministic, so value-set filters
/// are always applied in the same field order from one pass to the next.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    /// Free-text query; empty or whitespace-only means no text filter.
    pub search_query: String,
    /// Inclusive date window, or `None` for no date filter.
    pub date_range: Option<DateRange>,
    /// Selected values per field key. An empty set imposes no constraint.
    pub set_filters: BTreeMap<String, BTreeSet<String>>,
    /// Requested ordering, or `None` to preserve input order.
    pub sort: Option<SortSpec>,
}

impl FilterState {
    /// Create a state with all criteria unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the free-text query.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Apply an inclusive date window to `field`.
    pub fn set_date_range(&mut self, field: impl Into<String>, start: NaiveDate, end: NaiveDate) {
        self.date_range = Some(DateRange {
            field: field.into(),
            start,
            end,
        });
    }

    /// Remove the date window.
    pub fn clear_date_range(&mut self) {
        self.date_range = None;
    }

    /// Toggle a value in the selected set for `field`.
    ///
    /// Adds the value if it is not selected, removes it if it is. A field
    /// whose set becomes empty is dropped entirely, so it no longer appears
    /// in [`FilterState::set_filters`] at all.
    pub fn toggle_value(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let field = field.into();
        let value = value.into();
        let selected = self.set_filters.entry(field.clone()).or_default();
        if !selected.remove(&value) {
            selected.insert(value);
        }
        if selected.is_empty() {
            self.set_filters.remove(&field);
        }
    }

    /// Selected values for `field`, if any are set.
    pub fn selected(&self, field: &str) -> Option<&BTreeSet<String>> {
        self.set_filters.get(field)
    }

    /// Request ordering by `field`.
    pub fn set_sort(&mut self, field: impl Into<String>, direction: SortDirection) {
        self.sort = Some(SortSpec {
            field: field.into(),
            direction,
        });
    }

    /// Return to input ordering.
    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    /// True if every criterion is unset, i.e. a pass would keep everything.
    pub fn is_vacuous(&self) -> bool {
        self.search_query.trim().is_empty()
            && self.date_range.is_none()
            && self.set_filters.values().all(|s| s.is_empty())
            && self.sort.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_vacuous() {
        let state = FilterState::new();
        assert!(state.is_vacuous());
        assert!(state.search_query.is_empty());
        assert!(state.date_range.is_none());
        assert!(state.sort.is_none());
    }

    #[test]
    fn test_toggle_value_adds_then_removes() {
        let mut state = FilterState::new();

        state.toggle_value("status", "paid");
        assert!(state.selected("status").unwrap().contains("paid"));

        state.toggle_value("status", "pending");
        assert_eq!(state.selected("status").unwrap().len(), 2);

        state.toggle_value("status", "paid");
        assert!(!state.selected("status").unwrap().contains("paid"));
    }

    #[test]
    fn test_toggle_to_empty_drops_field() {
        let mut state = FilterState::new();
        state.toggle_value("status", "paid");
        state.toggle_value("status", "paid");

        assert!(state.selected("status").is_none());
        assert!(state.is_vacuous());
    }

    #[test]
    fn test_whitespace_query_is_vacuous() {
        let mut state = FilterState::new();
        state.set_search("   ");
        assert!(state.is_vacuous());
    }
}
