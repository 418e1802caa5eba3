//! # Error Types
//!
//! Domain-specific error types for mesa-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  mesa-core errors (this file)                                          │
//! │  ├── CoreError        - Rejected arguments, tender shortfall           │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  mesa-advisor errors (apps/advisor)                                    │
//! │  └── AdvisorError     - Config, file, JSON and core failures           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → caller (web handler / CLI)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The routines themselves are total over valid input. Errors only describe
//! arguments outside that domain; messaging is the caller's job.

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Errors returned by the decision-support routines.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An argument is outside the routine's domain.
    ///
    /// ## When This Occurs
    /// - Negative amount passed to the change optimizer
    /// - Negative budget passed to the restock optimizer
    /// - Candidate with a negative cost
    /// - Inventory value or candidate profits beyond `i64`
    /// - Knapsack table that cannot be allocated
    #[error("Invalid {field}: {reason}")]
    InvalidArgument { field: String, reason: String },

    /// Cash received does not cover the order.
    ///
    /// ## User Workflow
    /// ```text
    /// Order total: $48000.00
    /// Received:    $40000.00
    ///      │
    ///      ▼
    /// InsufficientTender { received: $40000.00, total: $48000.00 }
    ///      │
    ///      ▼
    /// Cashier is asked for the missing amount, no payment is recorded
    /// ```
    #[error("Amount received {received} is less than the order total {total}")]
    InsufficientTender { received: Money, total: Money },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    pub(crate) fn invalid_argument(field: &str, reason: impl Into<String>) -> Self {
        CoreError::InvalidArgument {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before a routine runs, usually while building records from
/// upstream rows.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (e.g. a malformed decimal amount).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
