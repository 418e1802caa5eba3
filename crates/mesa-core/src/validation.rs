//! # Validation Module
//!
//! Input validation for records handed to mesa-core.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Web forms                                                     │
//! │  └── Quantity, cost and price fields checked on submit                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Record construction (THIS MODULE)                            │
//! │  ├── InventoryRecord::new, CatalogProduct::new                         │
//! │  └── Restock budget ceiling before the knapsack table is allocated     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Routines                                                      │
//! │  └── Reject negative amounts and budgets with CoreError                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use mesa_core::validation::{validate_restock_budget, validate_stock_quantity};
//!
//! assert!(validate_stock_quantity(12).is_ok());
//! assert!(validate_restock_budget(200_000, 5_000_000).is_ok());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest product name the catalog stores.
pub const MAX_PRODUCT_NAME_LEN: usize = 100;

/// Largest stock count accepted for one product.
pub const MAX_STOCK_QUANTITY: i64 = 1_000_000;

/// Largest cost or price in centavos: a NUMERIC(10,2) column tops out at
/// 99.999.999,99 pesos.
pub const MAX_AMOUNT_CENTS: i64 = 9_999_999_999;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product identifier.
///
/// ## Rules
/// - Must not be empty after trimming
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "product id".to_string(),
        });
    }

    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 100 characters
///
/// ## Example
/// ```rust
/// use mesa_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Bandeja Paisa").is_ok());
/// assert!(validate_product_name("  ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a stock quantity.
///
/// ## Rules
/// - Must be zero or greater (zero means out of stock / blocked)
/// - Must be at most [`MAX_STOCK_QUANTITY`]
pub fn validate_stock_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_STOCK_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: MAX_STOCK_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a cost or price in centavos.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Must be at most [`MAX_AMOUNT_CENTS`]
///
/// With both bounds a row value (`quantity × unit cost`) stays below 10^16
/// centavos, so it always fits an `i64`.
///
/// ## Example
/// ```rust
/// use mesa_core::validation::validate_amount_cents;
///
/// assert!(validate_amount_cents("unit cost", 1210).is_ok());
/// assert!(validate_amount_cents("unit cost", -1).is_err());
/// assert!(validate_amount_cents("unit cost", 10_000_000_000).is_err());
/// ```
pub fn validate_amount_cents(field: &str, cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    if cents > MAX_AMOUNT_CENTS {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: MAX_AMOUNT_CENTS,
        });
    }

    Ok(())
}

/// Validates a restock budget against a ceiling.
///
/// ## Rules
/// - Must be between 0 and `max` (whole pesos)
///
/// ## Why a ceiling?
/// ```text
/// The knapsack table has (candidates + 1) × (budget + 1) cells.
///   100 candidates × 5.000.000 budget ≈ 500M cells ≈ 4 GB of i64
/// The caller picks `max` so the table fits the host.
/// ```
pub fn validate_restock_budget(budget: i64, max: i64) -> ValidationResult<()> {
    if budget < 0 || budget > max {
        return Err(ValidationError::OutOfRange {
            field: "budget".to_string(),
            min: 0,
            max,
        });
    }

    Ok(())
}

/// Validates the size of the knapsack table a restock run would allocate.
///
/// ## Rules
/// - `(candidates + 1) × (budget + 1)` must be at most `max_cells`
///
/// ```rust
/// use mesa_core::validation::validate_restock_table;
///
/// assert!(validate_restock_table(100, 200_000, 50_000_000).is_ok());
/// assert!(validate_restock_table(1_000, 5_000_000, 50_000_000).is_err());
/// ```
pub fn validate_restock_table(
    candidates: usize,
    budget: i64,
    max_cells: i64,
) -> ValidationResult<()> {
    let rows = i64::try_from(candidates).ok().and_then(|n| n.checked_add(1));
    let cells = rows
        .zip(budget.checked_add(1))
        .and_then(|(rows, width)| rows.checked_mul(width));

    match cells {
        Some(cells) if budget >= 0 && cells <= max_cells => Ok(()),
        _ => Err(ValidationError::OutOfRange {
            field: "restock table cells".to_string(),
            min: 0,
            max: max_cells,
        }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
