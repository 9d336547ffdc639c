//! Parser for record data files.
//!
//! Data files are JSON arrays exported by the upstream system:
//! - orders.json: id, code, patient, tests, status, ordered_at, total
//! - payments.json: id, reference, patient, method, status, paid_at, amount
//!
//! Status and method fields arrive as strings and are checked against the
//! known vocabulary here, with the record index in the error so a bad export
//! is easy to track down. Date fields are deliberately NOT validated: they
//! stay raw and the filtering layer treats unparseable ones as non-matching.

use crate::error::{RecordError, Result};
use crate::types::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// On-disk shape of an order record.
#[derive(Debug, Deserialize)]
struct RawOrder {
    id: OrderId,
    code: String,
    patient: String,
    #[serde(default)]
    tests: Vec<String>,
    status: String,
    ordered_at: String,
    total: f64,
}

/// On-disk shape of a payment record.
#[derive(Debug, Deserialize)]
struct RawPayment {
    id: PaymentId,
    reference: String,
    patient: String,
    method: String,
    status: String,
    paid_at: String,
    amount: f64,
}

fn invalid_value(file: &str, record: usize, field: &str, value: &str) -> RecordError {
    RecordError::InvalidValue {
        file: file.to_string(),
        record,
        field: field.to_string(),
        value: value.to_string(),
    }
}

fn parse_order_status(s: &str, file: &str, record: usize) -> Result<OrderStatus> {
    match s {
        "ordered" => Ok(OrderStatus::Ordered),
        "collected" => Ok(OrderStatus::Collected),
        "in_progress" => Ok(OrderStatus::InProgress),
        "completed" => Ok(OrderStatus::Completed),
        "cancelled" => Ok(OrderStatus::Cancelled),
        _ => Err(invalid_value(file, record, "status", s)),
    }
}

fn parse_payment_status(s: &str, file: &str, record: usize) -> Result<PaymentStatus> {
    match s {
        "pending" => Ok(PaymentStatus::Pending),
        "paid" => Ok(PaymentStatus::Paid),
        "refunded" => Ok(PaymentStatus::Refunded),
        "failed" => Ok(PaymentStatus::Failed),
        _ => Err(invalid_value(file, record, "status", s)),
    }
}

fn parse_payment_method(s: &str, file: &str, record: usize) -> Result<PaymentMethod> {
    match s {
        "cash" => Ok(PaymentMethod::Cash),
        "card" => Ok(PaymentMethod::Card),
        "insurance" => Ok(PaymentMethod::Insurance),
        "bank_transfer" => Ok(PaymentMethod::BankTransfer),
        _ => Err(invalid_value(file, record, "method", s)),
    }
}

/// Parse an orders JSON document.
///
/// `file` is only used for error context.
pub fn orders_from_json(json: &str, file: &str) -> Result<Vec<Order>> {
    let raw: Vec<RawOrder> = serde_json::from_str(json).map_err(|source| RecordError::Json {
        file: file.to_string(),
        source,
    })?;

    let mut orders = Vec::with_capacity(raw.len());
    for (idx, raw) in raw.into_iter().enumerate() {
        orders.push(Order {
            id: raw.id,
            code: raw.code,
            patient: raw.patient,
            tests: raw.tests,
            status: parse_order_status(&raw.status, file, idx)?,
            ordered_at: raw.ordered_at,
            total: raw.total,
        });
    }
    Ok(orders)
}

/// Parse a payments JSON document.
pub fn payments_from_json(json: &str, file: &str) -> Result<Vec<Payment>> {
    let raw: Vec<RawPayment> = serde_json::from_str(json).map_err(|source| RecordError::Json {
        file: file.to_string(),
        source,
    })?;

    let mut payments = Vec::with_capacity(raw.len());
    for (idx, raw) in raw.into_iter().enumerate() {
        payments.push(Payment {
            id: raw.id,
            reference: raw.reference,
            patient: raw.patient,
            method: parse_payment_method(&raw.method, file, idx)?,
            status: parse_payment_status(&raw.status, file, idx)?,
            paid_at: raw.paid_at,
            amount: raw.amount,
        });
    }
    Ok(payments)
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| RecordError::Io {
        file: path.display().to_string(),
        source,
    })
}

/// Parse the orders.json file
pub fn parse_orders(path: &Path) -> Result<Vec<Order>> {
    let json = read_file(path)?;
    orders_from_json(&json, &path.display().to_string())
}

/// Parse the payments.json file
pub fn parse_payments(path: &Path) -> Result<Vec<Payment>> {
    let json = read_file(path)?;
    payments_from_json(&json, &path.display().to_string())
}
