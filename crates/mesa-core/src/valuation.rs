//! # Valuation Module
//!
//! Total purchase value of a branch's inventory.
//!
//! The sum is a plain fold over the rows, so input size is bounded only by
//! memory (no recursion depth to worry about). Validated rows are each below
//! 10^16 centavos; the running total is still checked.

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::InventoryRecord;

/// Sum of `quantity × unit_cost` over the first `n` records.
///
/// `n` larger than the slice is clamped. The order of the rows does not
/// affect the result; callers usually pass the sorted listing they already
/// rendered together with its length.
///
/// ## Errors
/// `CoreError::InvalidArgument` if a row value or the total does not fit in
/// an `i64` of centavos.
///
/// ## Example
/// ```rust
/// use mesa_core::valuation::inventory_value;
/// use mesa_core::{InventoryRecord, Money};
///
/// let rows = vec![
///     InventoryRecord::new("1", "Queso", 3, Money::from_units(10)).unwrap(),
///     InventoryRecord::new("2", "Arepa", 2, Money::from_units(5)).unwrap(),
/// ];
/// let total = inventory_value(&rows, rows.len()).unwrap();
/// assert_eq!(total, Money::from_units(40));
/// assert_eq!(total.as_major_f64(), 40.0);
/// ```
pub fn inventory_value(records: &[InventoryRecord], n: usize) -> CoreResult<Money> {
    let considered = &records[..n.min(records.len())];

    let total = considered.iter().try_fold(Money::zero(), |total, record| {
        record
            .value()
            .and_then(|value| total.checked_add(value))
            .ok_or_else(|| {
                CoreError::invalid_argument(
                    "inventory",
                    format!("value overflows at product {}", record.product_id),
                )
            })
    })?;

    debug!(records = considered.len(), total = %total, "valued inventory");
    Ok(total)
}

/// Value of every record in the slice.
#[inline]
pub fn total_inventory_value(records: &[InventoryRecord]) -> CoreResult<Money> {
    inventory_value(records, records.len())
}
