//! # mesa-core: Decision Support for Mesa POS
//!
//! The numeric routines behind the cashier and inventory screens, as pure
//! functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Mesa POS Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │          Web application (routes, sessions, templates)          │   │
//! │  │   Cashier: register payment     Admin: inventory, restock       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain numbers and lists                │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ mesa-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  change   │  │   stock   │  │ valuation │  │  restock  │  │   │
//! │  │   │  greedy   │  │  stable   │  │   fold    │  │ knapsack  │  │   │
//! │  │   │ breakdown │  │   sort    │  │  q × cost │  │   0/1 DP  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO SHARED STATE • PURE FUNCTIONS      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`change`] - Change breakdown and cash tender settlement
//! - [`stock`] - Inventory ordering by quantity, low-stock report
//! - [`valuation`] - Total inventory value
//! - [`restock`] - Budget-constrained restock recommendation
//! - [`types`] - Records, candidates, plans
//! - [`money`] - Integer centavo amounts
//! - [`validation`] - Input checks
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input, same output; safe from any thread
//! 2. **Integer Money**: centavos in `i64`, truncated to whole pesos where a
//!    routine counts bills or indexes a table
//! 3. **Explicit Errors**: negative amounts and budgets are rejected, never
//!    silently computed
//!
//! ## Example Usage
//!
//! ```rust
//! use mesa_core::{optimal_change, Money};
//!
//! let change = optimal_change(Money::from_units(125_750)).unwrap();
//! assert_eq!(change.pieces(), 6);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod change;
pub mod error;
pub mod money;
pub mod restock;
pub mod stock;
pub mod types;
pub mod validation;
pub mod valuation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use change::{optimal_change, optimal_change_units, settle_tender, DENOMINATIONS};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use restock::{optimize_restock, restock_candidates};
pub use stock::{low_stock, sort_by_stock, DEFAULT_LOW_STOCK_THRESHOLD};
pub use types::*;
pub use valuation::{inventory_value, total_inventory_value};
