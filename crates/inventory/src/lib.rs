//! `orderdesk-inventory` — per-product stock ledger.
//!
//! One record per product: on-hand, reserved, reorder level. All reads and
//! writes go through the [`InventoryLedger`] trait so a stricter
//! implementation (row locks, compare-and-swap) can be substituted without
//! touching the order workflow.

pub mod ledger;

pub use ledger::{validate_levels, InventoryLedger, InventoryRecord};
