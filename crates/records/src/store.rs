//! Dataset loading and validation.

use crate::error::{RecordError, Result};
use crate::parser;
use crate::types::Dataset;
use std::path::Path;

impl Dataset {
    /// Load all record files from a data directory.
    ///
    /// Expects `orders.json` and `payments.json` in `data_dir`. The two
    /// files are independent, so they are parsed in parallel.
    pub fn load_from_dir(data_dir: &Path) -> Result<Self> {
        let orders_path = data_dir.join("orders.json");
        let payments_path = data_dir.join("payments.json");

        let (orders, payments) = rayon::join(
            || parser::parse_orders(&orders_path),
            || parser::parse_payments(&payments_path),
        );

        let dataset = Dataset {
            orders: orders?,
            payments: payments?,
        };
        dataset.validate()?;

        let (orders, payments) = dataset.counts();
        tracing::info!("Loaded {} orders, {} payments", orders, payments);

        Ok(dataset)
    }

    /// Validate data integrity after load.
    ///
    /// Checks that display codes/references are unique and that monetary
    /// amounts are non-negative.
    pub fn validate(&self) -> Result<()> {
        let mut codes = std::collections::HashSet::new();
        for order in &self.orders {
            if !codes.insert(order.code.as_str()) {
                return Err(RecordError::Validation(format!(
                    "duplicate order code: {}",
                    order.code
                )));
            }
            if order.total < 0.0 {
                return Err(RecordError::Validation(format!(
                    "negative total on {}: {}",
                    order.code, order.total
                )));
            }
        }

        let mut references = std::collections::HashSet::new();
        for payment in &self.payments {
            if !references.insert(payment.reference.as_str()) {
                return Err(RecordError::Validation(format!(
                    "duplicate payment reference: {}",
                    payment.reference
                )));
            }
            if payment.amount < 0.0 {
                return Err(RecordError::Validation(format!(
                    "negative amount on {}: {}",
                    payment.reference, payment.amount
                )));
            }
        }

        Ok(())
    }
}
