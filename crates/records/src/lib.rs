//! # Records Crate
//!
//! Lab domain records (orders and payments) and their filtering integration.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Order, Payment, Dataset, status enums)
//! - **parser**: Parse JSON record files into Rust structs
//! - **store**: Load and validate a full Dataset
//! - **filters**: `Filterable` impls and declarative filter controls
//! - **error**: Error types for record loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use records::Dataset;
//! use pipeline::{FilterState, filter_records};
//! use std::path::Path;
//!
//! let dataset = Dataset::load_from_dir(Path::new("data"))?;
//!
//! let mut state = FilterState::new();
//! state.toggle_value("status", "ordered");
//! let filtered = filter_records(dataset.orders.clone(), &state)?;
//! ```

// Public modules
pub mod error;
pub mod filters;
pub mod parser;
pub mod store;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{RecordError, Result};
pub use filters::{
    order_filter_controls, order_status_options, payment_filter_controls,
    payment_method_options, payment_status_options,
};
pub use types::{
    // Type aliases
    OrderId,
    PaymentId,
    // Core types
    Dataset,
    Order,
    Payment,
    // Enums
    OrderStatus,
    PaymentMethod,
    PaymentStatus,
};
