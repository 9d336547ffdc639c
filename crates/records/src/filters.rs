//! Filtering integration for orders and payments.
//!
//! This module wires the domain types into the generic pipeline: `Filterable`
//! impls declaring each record's searchable projection and filter fields,
//! plus the declarative filter controls a frontend renders for each list
//! view. Payments expose status and method as symmetric value-set filters.

use crate::types::{Order, OrderStatus, Payment, PaymentMethod, PaymentStatus};
use pipeline::{
    FilterControl, FilterOption, Filterable, OptionMeta, Result, SortKey, derive_options,
    parse_record_date,
};

/// Sort key for a raw date string.
///
/// Parseable dates sort by calendar order; malformed ones fall back to their
/// raw text, which groups them together deterministically instead of failing
/// the pass.
fn date_sort_key(raw: &str) -> SortKey {
    match parse_record_date(raw) {
        Some(date) => SortKey::Date(date),
        None => SortKey::Text(raw.to_string()),
    }
}

impl Filterable for Order {
    fn search_haystack(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.patient.clone(),
            self.tests.join(" "),
            self.status.label().to_string(),
        ]
    }

    fn set_field(&self, field: &str) -> Option<&str> {
        match field {
            "status" => Some(self.status.as_str()),
            _ => None,
        }
    }

    fn date_field(&self, field: &str) -> Option<&str> {
        match field {
            "ordered_at" => Some(&self.ordered_at),
            _ => None,
        }
    }

    fn sort_key(&self, field: &str) -> Option<SortKey> {
        match field {
            "code" => Some(SortKey::Text(self.code.clone())),
            "patient" => Some(SortKey::Text(self.patient.clone())),
            "status" => Some(SortKey::Text(self.status.as_str().to_string())),
            "ordered_at" => Some(date_sort_key(&self.ordered_at)),
            "total" => Some(SortKey::Number(self.total)),
            _ => None,
        }
    }
}

impl Filterable for Payment {
    fn search_haystack(&self) -> Vec<String> {
        vec![
            self.reference.clone(),
            self.patient.clone(),
            self.method.label().to_string(),
            self.status.label().to_string(),
        ]
    }

    fn set_field(&self, field: &str) -> Option<&str> {
        match field {
            "status" => Some(self.status.as_str()),
            "method" => Some(self.method.as_str()),
            _ => None,
        }
    }

    fn date_field(&self, field: &str) -> Option<&str> {
        match field {
            "paid_at" => Some(&self.paid_at),
            _ => None,
        }
    }

    fn sort_key(&self, field: &str) -> Option<SortKey> {
        match field {
            "reference" => Some(SortKey::Text(self.reference.clone())),
            "patient" => Some(SortKey::Text(self.patient.clone())),
            "status" => Some(SortKey::Text(self.status.as_str().to_string())),
            "method" => Some(SortKey::Text(self.method.as_str().to_string())),
            "paid_at" => Some(date_sort_key(&self.paid_at)),
            "amount" => Some(SortKey::Number(self.amount)),
            _ => None,
        }
    }
}

/// Selectable options for the order status filter.
pub fn order_status_options() -> Result<Vec<FilterOption>> {
    let values = OrderStatus::ALL.map(|s| s.as_str());
    let meta = OrderStatus::ALL.map(|s| {
        (
            s.as_str(),
            OptionMeta {
                label: s.label(),
                color: Some(s.color()),
            },
        )
    });
    derive_options(&values, &meta)
}

/// Selectable options for the payment status filter.
pub fn payment_status_options() -> Result<Vec<FilterOption>> {
    let values = PaymentStatus::ALL.map(|s| s.as_str());
    let meta = PaymentStatus::ALL.map(|s| {
        (
            s.as_str(),
            OptionMeta {
                label: s.label(),
                color: Some(s.color()),
            },
        )
    });
    derive_options(&values, &meta)
}

/// Selectable options for the payment method filter.
///
/// Methods carry no status color; they render in the neutral style.
pub fn payment_method_options() -> Result<Vec<FilterOption>> {
    let values = PaymentMethod::ALL.map(|m| m.as_str());
    let meta = PaymentMethod::ALL.map(|m| {
        (
            m.as_str(),
            OptionMeta {
                label: m.label(),
                color: None,
            },
        )
    });
    derive_options(&values, &meta)
}

/// Filter controls for the orders list view.
pub fn order_filter_controls() -> Result<Vec<FilterControl>> {
    Ok(vec![
        FilterControl::Search {
            placeholder: "Search orders, patients, tests".to_string(),
        },
        FilterControl::DateRange {
            field: "ordered_at".to_string(),
            label: "Ordered between".to_string(),
        },
        FilterControl::MultiSelect {
            field: "status".to_string(),
            label: "Status".to_string(),
            options: order_status_options()?,
        },
    ])
}

/// Filter controls for the payments list view.
pub fn payment_filter_controls() -> Result<Vec<FilterControl>> {
    Ok(vec![
        FilterControl::Search {
            placeholder: "Search payments and patients".to_string(),
        },
        FilterControl::DateRange {
            field: "paid_at".to_string(),
            label: "Paid between".to_string(),
        },
        FilterControl::MultiSelect {
            field: "status".to_string(),
            label: "Status".to_string(),
            options: payment_status_options()?,
        },
        FilterControl::MultiSelect {
            field: "method".to_string(),
            label: "Method".to_string(),
            options: payment_method_options()?,
        },
    ])
}
