//! Inclusive date-window stage.
//!
//! Record date fields come in as raw strings from loosely-typed upstream
//! data, so this stage parses them leniently: a value that parses to a date
//! is compared against the window, a value that does not simply never
//! matches while a window is active. Referencing a date field the record
//! type does not expose is a configuration error and fails the pass.

use crate::error::{PipelineError, Result};
use crate::state::FilterState;
use crate::traits::{Filterable, Stage};
use chrono::{DateTime, NaiveDate};

/// Parse a raw record date.
///
/// Accepts plain ISO dates ("2024-03-15") and RFC 3339 timestamps
/// ("2024-03-15T09:30:00Z"), which are truncated to their date part.
/// Returns `None` for anything else.
pub fn parse_record_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Keeps records whose date field falls within `[start, end]`.
///
/// ## Algorithm
/// 1. No active window keeps every record
/// 2. Otherwise resolve the raw date field per record (unknown field is a
///    configuration error), parse leniently, and keep the record only when
///    the parsed date is inside the window, bounds included
pub struct DateRangeStage;

impl<T: Filterable> Stage<T> for DateRangeStage {
    fn name(&self) -> &str {
        "DateRangeStage"
    }

    fn apply(&self, records: Vec<T>, state: &FilterState) -> Result<Vec<T>> {
        let Some(range) = &state.date_range else {
            return Ok(records);
        };

        let mut kept = Vec::with_capacity(records.len());
        for record in records {
            let raw = record
                .date_field(&range.field)
                .ok_or_else(|| PipelineError::UnknownDateField {
                    field: range.field.clone(),
                })?;
            let parsed = parse_record_date(raw);
            if let Some(date) = parsed {
                if date >= range.start && date <= range.end {
                    kept.push(record);
                }
            }
        }
        Ok(kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Dated {
        id: u32,
        when: String,
    }

    impl Dated {
        fn new(id: u32, when: &str) -> Self {
            Self {
                id,
                when: when.to_string(),
            }
        }
    }

    impl Filterable for Dated {
        fn search_haystack(&self) -> Vec<String> {
            vec![self.when.clone()]
        }

        fn date_field(&self, field: &str) -> Option<&str> {
            match field {
                "when" => Some(&self.when),
                _ => None,
            }
        }
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_record_date_formats() {
        assert_eq!(parse_record_date("2024-03-15"), Some(ymd(2024, 3, 15)));
        assert_eq!(
            parse_record_date("2024-03-15T09:30:00Z"),
            Some(ymd(2024, 3, 15))
        );
        assert_eq!(parse_record_date("not a date"), None);
        assert_eq!(parse_record_date(""), None);
    }

    #[test]
    fn test_no_window_keeps_everything() {
        let stage = DateRangeStage;
        let records = vec![Dated::new(1, "2024-01-01"), Dated::new(2, "garbage")];
        let kept = stage.apply(records, &FilterState::new()).unwrap();
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let stage = DateRangeStage;
        let mut state = FilterState::new();
        state.set_date_range("when", ymd(2024, 3, 1), ymd(2024, 3, 31));

        let records = vec![
            Dated::new(1, "2024-02-29"),
            Dated::new(2, "2024-03-01"),
            Dated::new(3, "2024-03-31"),
            Dated::new(4, "2024-04-01"),
        ];
        let kept = stage.apply(records, &state).unwrap();

        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].id, 2);
        assert_eq!(kept[1].id, 3);
    }

    #[test]
    fn test_malformed_date_never_matches() {
        let stage = DateRangeStage;
        let mut state = FilterState::new();
        state.set_date_range("when", ymd(2024, 1, 1), ymd(2024, 12, 31));

        let records = vec![Dated::new(1, "2024-06-01"), Dated::new(2, "06/01/2024")];
        let kept = stage.apply(records, &state).unwrap();

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, 1);
    }

    #[test]
    fn test_unknown_field_fails_fast() {
        let stage = DateRangeStage;
        let mut state = FilterState::new();
        state.set_date_range("created", ymd(2024, 1, 1), ymd(2024, 12, 31));

        let err = stage
            .apply(vec![Dated::new(1, "2024-06-01")], &state)
            .unwrap_err();
        assert_eq!(
            err,
            PipelineError::UnknownDateField {
                field: "created".to_string()
            }
        );
    }
}
