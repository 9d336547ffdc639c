//! Core traits for the filtering pipeline.
//!
//! `Filterable` is the seam between the generic pipeline and a concrete record
//! type: it supplies the search projection and keyed accessors for the date,
//! value-set and sort stages. `Stage` is the unit of pipeline composition.

use crate::error::Result;
use crate::state::FilterState;
use chrono::NaiveDate;
use std::cmp::Ordering;

/// A typed sort key resolved from one record field.
///
/// Text compares lexicographically, numbers by value (total order, so NaN is
/// well-behaved), dates by calendar order. Keys of different kinds compare by
/// kind so a field that yields mixed kinds still sorts deterministically.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Text(String),
    Number(f64),
    Date(NaiveDate),
}

impl SortKey {
    fn rank(&self) -> u8 {
        match self {
            SortKey::Text(_) => 0,
            SortKey::Number(_) => 1,
            SortKey::Date(_) => 2,
        }
    }

    /// Total ordering between two keys.
    pub fn compare(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Date(a), SortKey::Date(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// A record the pipeline can filter.
///
/// The accessor methods are keyed by field name and default to "not exposed";
/// implementors override only the ones their record type declares. Returning
/// `None` from an accessor while an active filter references that key is
/// treated as a configuration error by the corresponding stage.
///
/// ## Design Note
/// All accessors must be pure and cheap: the search projection in particular
/// runs once per record on every filtering pass.
pub trait Filterable {
    /// Strings matched against the free-text query.
    fn search_haystack(&self) -> Vec<String>;

    /// Current value of a value-set filter field, as its stable identifier.
    fn set_field(&self, field: &str) -> Option<&str> {
        let _ = field;
        None
    }

    /// Raw date string for a date-range filter field.
    ///
    /// Raw because these values come from loosely-typed upstream data; the
    /// date-range stage parses leniently and treats malformed values as
    /// non-matching rather than failing the pass.
    fn date_field(&self, field: &str) -> Option<&str> {
        let _ = field;
        None
    }

    /// Typed sort key for a sortable field.
    fn sort_key(&self, field: &str) -> Option<SortKey> {
        let _ = field;
        None
    }
}

/// One stage of the filtering pipeline.
///
/// ## Design Note
/// - `Send + Sync` allows pipelines to be shared across threads
/// - Stages take ownership of the `Vec<T>` and return a new one, so a pass
///   never mutates the caller's collection in place
pub trait Stage<T: Filterable>: Send + Sync {
    /// Name of this stage (for logging/debugging).
    fn name(&self) -> &str;

    /// Apply this stage to a set of records.
    fn apply(&self, records: Vec<T>, state: &FilterState) -> Result<Vec<T>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_keys_compare_lexicographically() {
        let a = SortKey::Text("ORD-1001".to_string());
        let b = SortKey::Text("ORD-1002".to_string());
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(b.compare(&a), Ordering::Greater);
        assert_eq!(a.compare(&a.clone()), Ordering::Equal);
    }

    #[test]
    fn test_number_keys_have_total_order() {
        let small = SortKey::Number(5.0);
        let big = SortKey::Number(20.0);
        let nan = SortKey::Number(f64::NAN);

        assert_eq!(small.compare(&big), Ordering::Less);
        // total_cmp puts NaN after all real values
        assert_eq!(nan.compare(&big), Ordering::Greater);
        assert_eq!(nan.compare(&nan), Ordering::Equal);
    }

    #[test]
    fn test_mixed_kinds_compare_by_kind() {
        let text = SortKey::Text("2024-01-01".to_string());
        let date = SortKey::Date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(text.compare(&date), Ordering::Less);
        assert_eq!(date.compare(&text), Ordering::Greater);
    }
}
