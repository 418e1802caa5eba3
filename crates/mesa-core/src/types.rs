//! # Domain Types
//!
//! Plain data handed in and out of the decision-support routines.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ InventoryRecord │   │ CatalogProduct  │   │ RestockCandidate│       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  product_id     │   │  id             │   │  id, name       │       │
//! │  │  quantity       │   │  cost_cents     │──►│  cost  (pesos)  │       │
//! │  │  unit_cost_cents│   │  price_cents    │   │  profit (pesos) │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │   sort / value           restock_candidates    optimize_restock        │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ ChangeBreakdown │   │ CashSettlement  │   │  RestockPlan    │       │
//! │  │  denom → count  │   │  change + bills │   │  selected+profit│       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Records are snapshots supplied by the persistence layer. Nothing here is
//! mutated by the routines; they return new values.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{
    validate_amount_cents, validate_product_id, validate_product_name, validate_stock_quantity,
    ValidationResult,
};

// =============================================================================
// Inventory Record
// =============================================================================

/// One product's stock level at a branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InventoryRecord {
    /// Product this row counts.
    pub product_id: String,

    /// Product display name.
    pub product_name: String,

    /// Units on hand (never negative).
    pub quantity: i64,

    /// Purchase cost per unit in centavos.
    pub unit_cost_cents: i64,
}

impl InventoryRecord {
    /// Builds a validated record.
    ///
    /// ```rust
    /// use mesa_core::{InventoryRecord, Money};
    ///
    /// let row = InventoryRecord::new("7", "Gaseosa 400ml", 24, Money::from_units(1800)).unwrap();
    /// assert_eq!(row.value(), Some(Money::from_units(43_200)));
    ///
    /// assert!(InventoryRecord::new("7", "Gaseosa 400ml", -1, Money::zero()).is_err());
    /// ```
    pub fn new(
        product_id: impl Into<String>,
        product_name: impl Into<String>,
        quantity: i64,
        unit_cost: Money,
    ) -> ValidationResult<Self> {
        let record = InventoryRecord {
            product_id: product_id.into(),
            product_name: product_name.into(),
            quantity,
            unit_cost_cents: unit_cost.cents(),
        };
        record.validate()?;
        Ok(record)
    }

    /// Checks a record that arrived through deserialization.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_product_id(&self.product_id)?;
        validate_product_name(&self.product_name)?;
        validate_stock_quantity(self.quantity)?;
        validate_amount_cents("unit cost", self.unit_cost_cents)
    }

    /// Returns the unit cost as Money.
    #[inline]
    pub fn unit_cost(&self) -> Money {
        Money::from_cents(self.unit_cost_cents)
    }

    /// Value of this row: `quantity × unit_cost`.
    ///
    /// `None` only when the product overflows, which a validated record
    /// cannot do.
    #[inline]
    pub fn value(&self) -> Option<Money> {
        self.unit_cost().checked_multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Catalog Product
// =============================================================================

/// A product as the catalog stores it, before it becomes a restock candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CatalogProduct {
    pub id: String,
    pub name: String,
    /// Purchase cost in centavos.
    pub cost_cents: i64,
    /// Sale price in centavos.
    pub price_cents: i64,
}

impl CatalogProduct {
    /// Builds a validated catalog product.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        cost: Money,
        price: Money,
    ) -> ValidationResult<Self> {
        let product = CatalogProduct {
            id: id.into(),
            name: name.into(),
            cost_cents: cost.cents(),
            price_cents: price.cents(),
        };
        product.validate()?;
        Ok(product)
    }

    /// Checks a product that arrived through deserialization.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_product_id(&self.id)?;
        validate_product_name(&self.name)?;
        validate_amount_cents("cost", self.cost_cents)?;
        validate_amount_cents("price", self.price_cents)
    }

    #[inline]
    pub fn cost(&self) -> Money {
        Money::from_cents(self.cost_cents)
    }

    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Profit per unit sold (`price - cost`), possibly negative.
    #[inline]
    pub fn margin(&self) -> Money {
        self.price() - self.cost()
    }
}

// =============================================================================
// Restock Candidate / Plan
// =============================================================================

/// A product considered for restocking.
///
/// Cost and profit are whole pesos: the knapsack table is indexed by budget,
/// so fractional currency is not modeled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RestockCandidate {
    pub id: String,
    pub name: String,
    pub cost: i64,
    pub profit: i64,
}

impl RestockCandidate {
    pub fn new(id: impl Into<String>, name: impl Into<String>, cost: i64, profit: i64) -> Self {
        RestockCandidate {
            id: id.into(),
            name: name.into(),
            cost,
            profit,
        }
    }
}

/// The recommended purchase list and the profit it yields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RestockPlan {
    /// Chosen candidates, last-considered first.
    pub selected: Vec<RestockCandidate>,

    /// Maximum achievable profit within the budget.
    pub total_profit: i64,
}

impl RestockPlan {
    /// Total cost of the selected candidates.
    pub fn total_cost(&self) -> i64 {
        self.selected.iter().map(|c| c.cost).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

// =============================================================================
// Change Breakdown
// =============================================================================

/// Count of each bill/coin to hand back, keyed by denomination (whole pesos).
///
/// Only denominations actually used have an entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChangeBreakdown(BTreeMap<i64, i64>);

impl ChangeBreakdown {
    pub(crate) fn record(&mut self, denomination: i64, count: i64) {
        self.0.insert(denomination, count);
    }

    /// Number of pieces of `denomination`, zero when unused.
    pub fn count(&self, denomination: i64) -> i64 {
        self.0.get(&denomination).copied().unwrap_or(0)
    }

    /// Sum of `denomination × count` in whole pesos.
    pub fn total(&self) -> i64 {
        self.0.iter().map(|(d, c)| d * c).sum()
    }

    /// Total number of bills and coins.
    pub fn pieces(&self) -> i64 {
        self.0.values().sum()
    }

    /// Entries from the largest denomination down, as they are counted out.
    pub fn iter(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.0.iter().rev().map(|(d, c)| (*d, *c))
    }

    /// Number of distinct denominations used.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// =============================================================================
// Payment Method / Cash Settlement
// =============================================================================

/// How an order was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Bills and coins; the only method that produces physical change.
    Cash,
    /// Card on an external terminal.
    Card,
    /// Nequi mobile wallet transfer.
    Nequi,
}

impl PaymentMethod {
    #[inline]
    pub const fn is_cash(&self) -> bool {
        matches!(self, PaymentMethod::Cash)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
            PaymentMethod::Nequi => "nequi",
        };
        f.write_str(name)
    }
}

/// Accepts the English names and the labels the cashier form submits.
impl FromStr for PaymentMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cash" | "efectivo" => Ok(PaymentMethod::Cash),
            "card" | "tarjeta" => Ok(PaymentMethod::Card),
            "nequi" => Ok(PaymentMethod::Nequi),
            other => Err(ValidationError::InvalidFormat {
                field: "payment method".to_string(),
                reason: format!("unknown method '{other}'"),
            }),
        }
    }
}

/// What the cashier hands back after a payment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CashSettlement {
    /// Change owed (zero for non-cash payments).
    pub change: Money,

    /// Bills and coins for `change`; empty unless cash with positive change.
    pub breakdown: ChangeBreakdown,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_record_value() {
        let row = InventoryRecord::new("1", "Arroz 5kg", 3, Money::from_cents(1210)).unwrap();
        assert_eq!(row.unit_cost().cents(), 1210);
        assert_eq!(row.value(), Some(Money::from_cents(3630)));

        let unchecked = InventoryRecord {
            product_id: "2".to_string(),
            product_name: "Bodega".to_string(),
            quantity: i64::MAX,
            unit_cost_cents: 2,
        };
        assert_eq!(unchecked.value(), None);
    }

    #[test]
    fn test_inventory_record_rejects_bad_input() {
        assert!(InventoryRecord::new("", "Arroz", 1, Money::zero()).is_err());
        assert!(InventoryRecord::new("1", "", 1, Money::zero()).is_err());
        assert!(InventoryRecord::new("1", "Arroz", -2, Money::zero()).is_err());
        assert!(InventoryRecord::new("1", "Arroz", 2, Money::from_cents(-1)).is_err());
        assert!(
            InventoryRecord::new("1", "Arroz", 1_000_000_000_000, Money::from_units(100_000)).is_err()
        );
        assert!(
            CatalogProduct::new("1", "Arroz", Money::from_units(1), Money::from_cents(i64::MAX)).is_err()
        );
    }

    #[test]
    fn test_catalog_margin() {
        let p = CatalogProduct::new("9", "Limonada", Money::from_units(2_000), Money::from_units(6_500))
            .unwrap();
        assert_eq!(p.margin(), Money::from_units(4_500));
    }

    #[test]
    fn test_breakdown_accessors() {
        let mut b = ChangeBreakdown::default();
        b.record(50, 1);
        b.record(20_000, 2);
        b.record(1_000, 3);

        assert_eq!(b.count(20_000), 2);
        assert_eq!(b.count(100), 0);
        assert_eq!(b.total(), 43_050);
        assert_eq!(b.pieces(), 6);
        assert_eq!(b.len(), 3);

        let order: Vec<i64> = b.iter().map(|(d, _)| d).collect();
        assert_eq!(order, vec![20_000, 1_000, 50]);
    }

    #[test]
    fn test_breakdown_serializes_as_map() {
        let mut b = ChangeBreakdown::default();
        b.record(500, 1);
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(json, r#"{"500":1}"#);
    }

    #[test]
    fn test_payment_method_parse() {
        assert_eq!("efectivo".parse::<PaymentMethod>().unwrap(), PaymentMethod::Cash);
        assert_eq!("Card".parse::<PaymentMethod>().unwrap(), PaymentMethod::Card);
        assert_eq!("tarjeta".parse::<PaymentMethod>().unwrap(), PaymentMethod::Card);
        assert_eq!("nequi".parse::<PaymentMethod>().unwrap(), PaymentMethod::Nequi);
        assert!("bitcoin".parse::<PaymentMethod>().is_err());
        assert_eq!(PaymentMethod::Nequi.to_string(), "nequi");
    }

    #[test]
    fn test_restock_plan_total_cost() {
        let plan = RestockPlan {
            selected: vec![
                RestockCandidate::new("a", "A", 4, 40),
                RestockCandidate::new("b", "B", 6, 30),
            ],
            total_profit: 70,
        };
        assert_eq!(plan.total_cost(), 10);
        assert!(!plan.is_empty());
        assert!(RestockPlan::default().is_empty());
    }
}
