//! Core domain types for lab orders and payments.
//!
//! Status and method enums carry their display metadata (`label`, `color`)
//! alongside the stable identifier (`as_str`) that record files and filter
//! state use. Date fields stay raw strings: they originate from
//! loosely-typed upstream exports and the filtering layer parses them
//! leniently instead of rejecting whole records at load time.

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a lab order
pub type OrderId = u32;

/// Unique identifier for a payment
pub type PaymentId = u32;

// =============================================================================
// Order Types
// =============================================================================

/// Lifecycle status of a lab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Ordered,
    Collected,
    InProgress,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// All statuses, in display order.
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Ordered,
        OrderStatus::Collected,
        OrderStatus::InProgress,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    /// Stable identifier used in record files and filter state.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Ordered => "ordered",
            OrderStatus::Collected => "collected",
            OrderStatus::InProgress => "in_progress",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Ordered => "Ordered",
            OrderStatus::Collected => "Sample Collected",
            OrderStatus::InProgress => "In Progress",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Display color token.
    pub fn color(&self) -> &'static str {
        match self {
            OrderStatus::Ordered => "amber",
            OrderStatus::Collected => "blue",
            OrderStatus::InProgress => "violet",
            OrderStatus::Completed => "green",
            OrderStatus::Cancelled => "red",
        }
    }
}

/// A lab test order.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    /// Display code, e.g. "ORD-1002"
    pub code: String,
    pub patient: String,
    /// Names of the ordered tests
    pub tests: Vec<String>,
    pub status: OrderStatus,
    /// Raw order date from the upstream export; may be malformed
    pub ordered_at: String,
    pub total: f64,
}

// =============================================================================
// Payment Types
// =============================================================================

/// Settlement status of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentStatus {
    Pending,
    Paid,
    Refunded,
    Failed,
}

impl PaymentStatus {
    /// All statuses, in display order.
    pub const ALL: [PaymentStatus; 4] = [
        PaymentStatus::Pending,
        PaymentStatus::Paid,
        PaymentStatus::Refunded,
        PaymentStatus::Failed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Refunded => "refunded",
            PaymentStatus::Failed => "failed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Refunded => "Refunded",
            PaymentStatus::Failed => "Failed",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "amber",
            PaymentStatus::Paid => "green",
            PaymentStatus::Refunded => "blue",
            PaymentStatus::Failed => "red",
        }
    }
}

/// How a payment was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    Cash,
    Card,
    Insurance,
    BankTransfer,
}

impl PaymentMethod {
    /// All methods, in display order.
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Cash,
        PaymentMethod::Card,
        PaymentMethod::Insurance,
        PaymentMethod::BankTransfer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
            PaymentMethod::Insurance => "insurance",
            PaymentMethod::BankTransfer => "bank_transfer",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Card => "Card",
            PaymentMethod::Insurance => "Insurance",
            PaymentMethod::BankTransfer => "Bank Transfer",
        }
    }
}

/// A payment against a lab order.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: PaymentId,
    /// Display reference, e.g. "PAY-2031"
    pub reference: String,
    pub patient: String,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    /// Raw payment date from the upstream export; may be malformed
    pub paid_at: String,
    pub amount: f64,
}

// =============================================================================
// Dataset
// =============================================================================

/// All loaded records, in file order.
///
/// The filtering pipeline never mutates these collections; views clone the
/// slice they need and run a pass over the clone.
#[derive(Debug, Default)]
pub struct Dataset {
    pub orders: Vec<Order>,
    pub payments: Vec<Payment>,
}

impl Dataset {
    /// Creates a new, empty Dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Record counts for logging/validation
    pub fn counts(&self) -> (usize, usize) {
        (self.orders.len(), self.payments.len())
    }
}
