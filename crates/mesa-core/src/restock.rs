//! # Restock Module
//!
//! Recommends which products to buy with a fixed budget.
//!
//! ## Inventory Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog (cost, price)                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  restock_candidates() ── keep products with price - cost > 0           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_restock_budget() ── caller bounds the table size             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  optimize_restock(budget) ── 0/1 knapsack, cost = weight               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  RestockPlan { selected, total_profit }                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Table
//! `best[i][w]` is the best profit using the first `i` candidates with `w`
//! pesos. Row 0 is all zeros. Time and memory are O(n × budget), which is
//! fine for one branch's budget and catalog but not for arbitrary budgets.

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::types::{CatalogProduct, RestockCandidate, RestockPlan};

/// Turns catalog products into knapsack candidates.
///
/// cost = purchase cost in whole pesos, profit = `price - cost` in whole
/// pesos (both truncated). Products whose profit is not positive are
/// dropped. Order is preserved.
pub fn restock_candidates(catalog: &[CatalogProduct]) -> Vec<RestockCandidate> {
    catalog
        .iter()
        .filter_map(|product| {
            let profit = product.margin().whole_units();
            if profit <= 0 {
                return None;
            }
            Some(RestockCandidate::new(
                product.id.clone(),
                product.name.clone(),
                product.cost().whole_units(),
                profit,
            ))
        })
        .collect()
}

/// Picks the subset of `candidates` with maximum total profit whose total
/// cost fits in `budget`. Each candidate is used at most once.
///
/// Candidates are expected to have positive profit (see
/// [`restock_candidates`]): reconstruction stops as soon as the remaining
/// profit reaches zero, so zero-profit picks are never reported.
///
/// ## Errors
/// `CoreError::InvalidArgument` for a negative budget, a negative candidate
/// cost, profits whose sum does not fit an `i64`, or a table that cannot be
/// allocated. Callers bound the table size beforehand with
/// [`validate_restock_table`](crate::validation::validate_restock_table).
///
/// ## Example
/// ```rust
/// use mesa_core::restock::optimize_restock;
/// use mesa_core::RestockCandidate;
///
/// let candidates = vec![
///     RestockCandidate::new("1", "Cerveza", 5, 10),
///     RestockCandidate::new("2", "Empanadas", 4, 40),
///     RestockCandidate::new("3", "Jugo", 6, 30),
/// ];
/// let plan = optimize_restock(10, &candidates).unwrap();
/// assert_eq!(plan.total_profit, 70);
/// assert_eq!(plan.total_cost(), 10);
/// ```
pub fn optimize_restock(budget: i64, candidates: &[RestockCandidate]) -> CoreResult<RestockPlan> {
    if budget < 0 {
        return Err(CoreError::invalid_argument(
            "budget",
            format!("{budget} is negative"),
        ));
    }
    if let Some(bad) = candidates.iter().find(|c| c.cost < 0) {
        return Err(CoreError::invalid_argument(
            "cost",
            format!("candidate {} has negative cost {}", bad.id, bad.cost),
        ));
    }

    // Every cell is at most the sum of the positive profits
    candidates
        .iter()
        .try_fold(0i64, |sum, c| sum.checked_add(c.profit.max(0)))
        .ok_or_else(|| CoreError::invalid_argument("profit", "total candidate profit overflows"))?;

    let max_w = usize::try_from(budget)
        .map_err(|_| CoreError::invalid_argument("budget", "too large for this platform"))?;
    let n = candidates.len();
    let width = max_w
        .checked_add(1)
        .ok_or_else(|| CoreError::invalid_argument("budget", "too large for this platform"))?;
    let cells = width
        .checked_mul(n + 1)
        .ok_or_else(|| CoreError::invalid_argument("budget", "knapsack table too large"))?;

    // Row-major (n + 1) × (budget + 1)
    let mut best: Vec<i64> = Vec::new();
    best.try_reserve_exact(cells).map_err(|_| {
        CoreError::invalid_argument(
            "budget",
            format!("knapsack table of {cells} cells cannot be allocated"),
        )
    })?;
    best.resize(cells, 0);
    let at = |i: usize, w: usize| i * width + w;

    for (idx, candidate) in candidates.iter().enumerate() {
        let i = idx + 1;
        // Costs that don't fit usize can never fit the budget either
        let cost = usize::try_from(candidate.cost).unwrap_or(usize::MAX);

        for w in 0..width {
            let skip = best[at(i - 1, w)];
            best[at(i, w)] = if cost > w {
                skip
            } else {
                skip.max(candidate.profit + best[at(i - 1, w - cost)])
            };
        }
    }

    let total_profit = best[at(n, max_w)];

    // Walk back from the last candidate; a cell that differs from the row
    // above means that candidate was taken.
    let mut selected = Vec::new();
    let mut remaining = total_profit;
    let mut w = max_w;
    for i in (1..=n).rev() {
        if remaining <= 0 {
            break;
        }
        if best[at(i, w)] == best[at(i - 1, w)] {
            continue;
        }
        let candidate = &candidates[i - 1];
        selected.push(candidate.clone());
        remaining -= candidate.profit;
        // Taken implies cost <= w, so this fits usize
        w -= usize::try_from(candidate.cost).unwrap_or(w);
    }

    debug!(
        budget,
        candidates = n,
        selected = selected.len(),
        total_profit,
        "computed restock plan"
    );

    Ok(RestockPlan {
        selected,
        total_profit,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
