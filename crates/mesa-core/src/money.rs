//! # Money Module
//!
//! Provides the `Money` type for peso amounts.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Unit costs are stored upstream as NUMERIC(10,2):                      │
//! │    12.10 × 3 in f64 = 36.3 ... or 36.29999999999999  ❌                 │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Centavos                                         │
//! │    1210 centavos × 3 = 3630 centavos, exactly                          │
//! │    Whole pesos are derived by TRUNCATION when a routine needs them     │
//! │    (change breakdown, knapsack table index)                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use mesa_core::money::Money;
//!
//! let cost = Money::from_cents(1210);      // $12.10
//! let line = cost.multiply_quantity(3);    // $36.30
//! assert_eq!(line.cents(), 3630);
//! assert_eq!(line.whole_units(), 36);
//!
//! // Decimal strings parse without touching f64
//! let received: Money = "125750.99".parse().unwrap();
//! assert_eq!(received.whole_units(), 125750);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;

/// Minor units per peso.
const CENTS_PER_UNIT: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in centavos (1/100 peso).
///
/// ## Where Money is Used
/// ```text
/// InventoryRecord.unit_cost ──► quantity × unit_cost ──► inventory value
///
/// Order total, amount received ──► change ──► whole pesos ──► breakdown
///
/// CatalogProduct cost/price ──► whole pesos ──► knapsack cost/profit
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole pesos.
    ///
    /// Meant for literals and already-bounded amounts. `units` must be within
    /// `i64::MAX / 100` in magnitude; use [`Money::checked_from_units`] for
    /// anything read from outside.
    ///
    /// ```rust
    /// use mesa_core::money::Money;
    ///
    /// assert_eq!(Money::from_units(50).cents(), 5000);
    /// ```
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units * CENTS_PER_UNIT)
    }

    /// Creates a Money value from whole pesos, or `None` if it would overflow.
    ///
    /// ```rust
    /// use mesa_core::money::Money;
    ///
    /// assert_eq!(Money::checked_from_units(50), Some(Money::from_cents(5000)));
    /// assert_eq!(Money::checked_from_units(i64::MAX), None);
    /// ```
    #[inline]
    pub const fn checked_from_units(units: i64) -> Option<Self> {
        match units.checked_mul(CENTS_PER_UNIT) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Returns the value in centavos.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns whole pesos, truncating toward zero.
    ///
    /// ```rust
    /// use mesa_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(12599).whole_units(), 125);
    /// assert_eq!(Money::from_cents(-12599).whole_units(), -125);
    /// ```
    #[inline]
    pub const fn whole_units(&self) -> i64 {
        self.0 / CENTS_PER_UNIT
    }

    /// Returns the centavos portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % CENTS_PER_UNIT).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## User Workflow
    /// ```text
    /// Inventory row: Arroz 5kg, cost $12.10
    /// Quantity on hand: 3
    ///      │
    ///      ▼
    /// multiply_quantity(3) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Row value: $36.30
    /// ```
    ///
    /// Overflow follows integer arithmetic (panics in debug builds); see
    /// [`Money::checked_multiply_quantity`].
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// `self × qty`, or `None` on overflow.
    #[inline]
    pub const fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// `self + other`, or `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Floating-point view in pesos, for display callers only.
    #[inline]
    pub fn as_major_f64(&self) -> f64 {
        self.0 as f64 / CENTS_PER_UNIT as f64
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses a decimal peso amount such as `"1250"`, `"1250.5"` or `"-3.25"`.
///
/// At most two decimal digits are accepted, matching the NUMERIC(10,2)
/// columns the amounts come from.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: reason.to_string(),
        };

        let s = s.trim();
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (major, minor) = digits.split_once('.').unwrap_or((digits, ""));

        if major.is_empty() || !major.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("expected digits before the decimal point"));
        }
        if minor.len() > 2 || !minor.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("expected at most two decimal digits"));
        }

        let major: i64 = major.parse().map_err(|_| invalid("amount is too large"))?;
        // "5" means 50 centavos, "05" means 5
        let minor: i64 = format!("{minor:0<2}")
            .parse()
            .map_err(|_| invalid("expected at most two decimal digits"))?;

        let cents = major
            .checked_mul(CENTS_PER_UNIT)
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(|| invalid("amount is too large"))?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly rendering. Locale formatting belongs to the frontend.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.whole_units().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
