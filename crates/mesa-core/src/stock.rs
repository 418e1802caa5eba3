//! # Stock Module
//!
//! Orders a branch's inventory so the scarcest products come first.

use tracing::debug;

use crate::types::InventoryRecord;

/// Threshold at or below which a product is reported as low stock.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// Returns the records ordered by non-decreasing quantity.
///
/// The sort is stable: rows with equal quantity keep their input order,
/// so the listing does not reshuffle between page loads.
///
/// ## Example
/// ```rust
/// use mesa_core::stock::sort_by_stock;
/// use mesa_core::{InventoryRecord, Money};
///
/// let rows = vec![
///     InventoryRecord::new("1", "Papa", 30, Money::zero()).unwrap(),
///     InventoryRecord::new("2", "Yuca", 5, Money::zero()).unwrap(),
///     InventoryRecord::new("3", "Plátano", 12, Money::zero()).unwrap(),
/// ];
/// let sorted = sort_by_stock(&rows);
/// let qty: Vec<i64> = sorted.iter().map(|r| r.quantity).collect();
/// assert_eq!(qty, vec![5, 12, 30]);
/// ```
pub fn sort_by_stock(records: &[InventoryRecord]) -> Vec<InventoryRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|r| r.quantity);

    debug!(records = sorted.len(), "sorted inventory by stock");
    sorted
}

/// Records with `quantity <= threshold`, scarcest first.
pub fn low_stock(records: &[InventoryRecord], threshold: i64) -> Vec<InventoryRecord> {
    let mut low: Vec<InventoryRecord> = records
        .iter()
        .filter(|r| r.quantity <= threshold)
        .cloned()
        .collect();
    low.sort_by_key(|r| r.quantity);
    low
}
