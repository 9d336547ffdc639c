//! Integration tests for the filtering pipeline.
//!
//! These exercise the pipeline's contract as a whole: vacuous criteria keep
//! everything, output is always a subset in input order, passes are
//! idempotent, filter stages commute on membership, and the sort is stable.

use chrono::NaiveDate;
use pipeline::stages::{DateRangeStage, SortStage, ValueSetStage};
use pipeline::{
    FilterPipeline, FilterState, Filterable, SortDirection, SortKey, Stage, filter_records,
};

#[derive(Debug, Clone, PartialEq)]
struct Order {
    id: u32,
    code: String,
    status: &'static str,
    ordered_at: &'static str,
    amount: f64,
}

impl Order {
    fn new(id: u32, status: &'static str, ordered_at: &'static str, amount: f64) -> Self {
        Self {
            id,
            code: format!("ORD-{}", 1000 + id),
            status,
            ordered_at,
            amount,
        }
    }
}

impl Filterable for Order {
    fn search_haystack(&self) -> Vec<String> {
        vec![self.code.clone(), self.status.to_string()]
    }

    fn set_field(&self, field: &str) -> Option<&str> {
        match field {
            "status" => Some(self.status),
            _ => None,
        }
    }

    fn date_field(&self, field: &str) -> Option<&str> {
        match field {
            "ordered_at" => Some(self.ordered_at),
            _ => None,
        }
    }

    fn sort_key(&self, field: &str) -> Option<SortKey> {
        match field {
            "code" => Some(SortKey::Text(self.code.clone())),
            "status" => Some(SortKey::Text(self.status.to_string())),
            "amount" => Some(SortKey::Number(self.amount)),
            _ => None,
        }
    }
}

fn sample() -> Vec<Order> {
    vec![
        Order::new(1, "ordered", "2024-03-01", 10.0),
        Order::new(2, "paid", "2024-03-15", 20.0),
        Order::new(3, "ordered", "2024-04-02", 5.0),
        Order::new(4, "cancelled", "bad-date", 20.0),
        Order::new(5, "paid", "2024-02-10", 12.5),
    ]
}

fn ids(orders: &[Order]) -> Vec<u32> {
    orders.iter().map(|o| o.id).collect()
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A state with every kind of criterion active.
fn busy_state() -> FilterState {
    let mut state = FilterState::new();
    state.set_search("ord");
    state.set_date_range("ordered_at", ymd(2024, 1, 1), ymd(2024, 12, 31));
    state.toggle_value("status", "ordered");
    state.toggle_value("status", "paid");
    state.set_sort("amount", SortDirection::Asc);
    state
}

#[test]
fn vacuous_state_returns_input_unchanged() {
    let input = sample();
    let output = filter_records(input.clone(), &FilterState::new()).unwrap();
    assert_eq!(output, input);
}

#[test]
fn empty_search_query_is_vacuous() {
    let input = sample();
    let mut state = FilterState::new();
    state.set_search("");
    let output = filter_records(input.clone(), &state).unwrap();
    assert_eq!(output, input);
}

#[test]
fn output_is_always_a_subset_of_input() {
    let input = sample();
    let output = filter_records(input.clone(), &busy_state()).unwrap();

    assert!(output.len() <= input.len());
    for order in &output {
        assert!(input.contains(order), "fabricated record {:?}", order);
    }
}

#[test]
fn filtering_is_idempotent() {
    let state = busy_state();
    let once = filter_records(sample(), &state).unwrap();
    let twice = filter_records(once.clone(), &state).unwrap();
    assert_eq!(twice, once);
}

#[test]
fn date_and_set_stages_commute_on_membership() {
    let mut state = FilterState::new();
    state.set_date_range("ordered_at", ymd(2024, 3, 1), ymd(2024, 4, 30));
    state.toggle_value("status", "ordered");
    state.toggle_value("status", "paid");

    let date_then_set = FilterPipeline::new()
        .add_stage(DateRangeStage)
        .add_stage(ValueSetStage)
        .apply(sample(), &state)
        .unwrap();
    let set_then_date = FilterPipeline::new()
        .add_stage(ValueSetStage)
        .add_stage(DateRangeStage)
        .apply(sample(), &state)
        .unwrap();

    assert_eq!(ids(&date_then_set), ids(&set_then_date));
}

#[test]
fn sort_is_stable_for_equal_keys() {
    // Orders 2 and 4 share amount 20.0; 2 precedes 4 on input
    let mut state = FilterState::new();
    state.set_sort("amount", SortDirection::Asc);

    let sorted = filter_records(sample(), &state).unwrap();
    assert_eq!(ids(&sorted), vec![3, 1, 5, 2, 4]);
}

#[test]
fn search_is_case_insensitive_substring() {
    let mut state = FilterState::new();
    state.set_search("orD");

    // Every code contains "ORD"
    let found = filter_records(sample(), &state).unwrap();
    assert_eq!(found.len(), 5);

    state.set_search("ORD-1003");
    let found = filter_records(sample(), &state).unwrap();
    assert_eq!(ids(&found), vec![3]);
}

#[test]
fn status_selection_keeps_input_order() {
    let mut state = FilterState::new();
    state.toggle_value("status", "ordered");

    let filtered = filter_records(sample(), &state).unwrap();
    assert_eq!(ids(&filtered), vec![1, 3]);
}

#[test]
fn sort_only_reorders_without_dropping() {
    let mut state = FilterState::new();
    state.set_sort("amount", SortDirection::Asc);

    let sorted = filter_records(sample(), &state).unwrap();
    assert_eq!(sorted.len(), 5);
    // 5.0, 10.0, 12.5, 20.0, 20.0
    assert_eq!(ids(&sorted)[..3], [3, 1, 5]);
}

#[test]
fn malformed_date_is_excluded_only_while_range_active() {
    let mut state = FilterState::new();
    state.set_date_range("ordered_at", ymd(2024, 1, 1), ymd(2024, 12, 31));

    let filtered = filter_records(sample(), &state).unwrap();
    assert_eq!(ids(&filtered), vec![1, 2, 3, 5]);

    state.clear_date_range();
    let filtered = filter_records(sample(), &state).unwrap();
    assert_eq!(filtered.len(), 5);
}

#[test]
fn filtered_to_zero_is_ok_not_error() {
    let mut state = FilterState::new();
    state.set_search("no such order");
    let filtered = filter_records(sample(), &state).unwrap();
    assert!(filtered.is_empty());
}

#[test]
fn combined_pass_applies_every_stage() {
    let filtered = filter_records(sample(), &busy_state()).unwrap();

    // "ord" matches every code; date range drops 4 (malformed date);
    // status selection drops nothing further except 4; sorted by amount
    assert_eq!(ids(&filtered), vec![3, 1, 5, 2]);
}

#[test]
fn custom_stage_composes_with_builtins() {
    struct MinimumAmount(f64);

    impl Stage<Order> for MinimumAmount {
        fn name(&self) -> &str {
            "MinimumAmount"
        }

        fn apply(&self, records: Vec<Order>, _state: &FilterState) -> pipeline::Result<Vec<Order>> {
            Ok(records.into_iter().filter(|o| o.amount >= self.0).collect())
        }
    }

    let pipeline = FilterPipeline::new()
        .add_stage(MinimumAmount(12.0))
        .add_stage(SortStage);
    let mut state = FilterState::new();
    state.set_sort("amount", SortDirection::Desc);

    let filtered = pipeline.apply(sample(), &state).unwrap();
    assert_eq!(ids(&filtered), vec![2, 4, 5]);
}
