//! # Change Module
//!
//! Bills and coins to hand back after a cash payment.
//!
//! ## Cashier Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Order total $74.250 │ Received $200.000 │ Method: cash                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  settle_tender()  ── change = received - total = $125.750              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  optimal_change() ── greedy over DENOMINATIONS                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1×100.000  1×20.000  1×5.000  1×500  1×200  1×50                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Greedy is exact for this denomination set (every residual is a sum of
//! smaller denominations). That is a property of the set, not of greedy
//! change-making in general.

use tracing::{debug, warn};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CashSettlement, ChangeBreakdown, PaymentMethod};
use crate::validation::validate_amount_cents;

/// Colombian peso bills and coins, largest first.
pub const DENOMINATIONS: &[i64] = &[
    100_000, 50_000, 20_000, 10_000, 5_000, 2_000, 1_000, 500, 200, 100, 50,
];

/// Minimum-count breakdown of `amount`.
///
/// The amount is truncated to whole pesos first. Any remainder below the
/// smallest denomination (50) cannot be handed back and is left out of the
/// breakdown; compare [`ChangeBreakdown::total`] with the input to detect it.
///
/// ## Errors
/// `CoreError::InvalidArgument` for a negative amount.
///
/// ## Example
/// ```rust
/// use mesa_core::change::optimal_change;
/// use mesa_core::Money;
///
/// let breakdown = optimal_change(Money::from_units(125_750)).unwrap();
/// assert_eq!(breakdown.count(100_000), 1);
/// assert_eq!(breakdown.count(50), 1);
/// assert_eq!(breakdown.total(), 125_750);
/// ```
pub fn optimal_change(amount: Money) -> CoreResult<ChangeBreakdown> {
    if amount.is_negative() {
        return Err(CoreError::invalid_argument(
            "change amount",
            format!("{amount} is negative"),
        ));
    }

    optimal_change_units(amount.whole_units())
}

/// Same as [`optimal_change`] for an amount already in whole pesos.
pub fn optimal_change_units(units: i64) -> CoreResult<ChangeBreakdown> {
    if units < 0 {
        return Err(CoreError::invalid_argument(
            "change amount",
            format!("{units} is negative"),
        ));
    }

    let mut breakdown = ChangeBreakdown::default();
    let mut remaining = units;

    for &denomination in DENOMINATIONS {
        let count = remaining / denomination;
        if count > 0 {
            breakdown.record(denomination, count);
            remaining -= count * denomination;
        }
    }

    if remaining > 0 {
        warn!(
            amount = units,
            remainder = remaining,
            "change remainder below smallest denomination dropped"
        );
    }

    debug!(
        amount = units,
        pieces = breakdown.pieces(),
        "computed change breakdown"
    );

    Ok(breakdown)
}

/// Works out the change for a payment.
///
/// ## Rules
/// - Negative or oversized amounts → `CoreError::Validation`
/// - `received < order_total` → `CoreError::InsufficientTender`
/// - Card and Nequi: no physical change, even if more was keyed in
/// - Cash: change = received - total, broken down when positive
///
/// ## Example
/// ```rust
/// use mesa_core::change::settle_tender;
/// use mesa_core::{Money, PaymentMethod};
///
/// let s = settle_tender(
///     PaymentMethod::Cash,
///     Money::from_units(200_000),
///     Money::from_units(74_250),
/// )
/// .unwrap();
/// assert_eq!(s.change, Money::from_units(125_750));
/// assert_eq!(s.breakdown.count(20_000), 1);
/// ```
pub fn settle_tender(
    method: PaymentMethod,
    received: Money,
    order_total: Money,
) -> CoreResult<CashSettlement> {
    validate_amount_cents("amount received", received.cents())?;
    validate_amount_cents("order total", order_total.cents())?;

    if received < order_total {
        return Err(CoreError::InsufficientTender {
            received,
            total: order_total,
        });
    }

    if !method.is_cash() {
        debug!(%method, "non-cash payment, no change");
        return Ok(CashSettlement::default());
    }

    let change = received - order_total;
    let breakdown = if change.is_positive() {
        optimal_change(change)?
    } else {
        ChangeBreakdown::default()
    };

    Ok(CashSettlement { change, breakdown })
}

// =============================================================================
// Unit Tests
// =============================================================================
