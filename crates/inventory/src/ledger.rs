use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use orderdesk_core::{ProductId, ServiceError, ServiceResult};

/// Stock counters for one product.
///
/// Invariant (checked at creation and on `set_levels`, but deliberately NOT
/// on `adjust` — see [`InventoryLedger::adjust`]): `quantity_on_hand >=
/// reserved >= 0`, so `available()` never goes negative under serialized
/// operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub product_id: ProductId,
    pub quantity_on_hand: i64,
    pub reserved: i64,
    pub reorder_level: i64,
    pub updated_at: DateTime<Utc>,
}

impl InventoryRecord {
    /// Stock not yet claimed by a reservation.
    pub fn available(&self) -> i64 {
        self.quantity_on_hand - self.reserved
    }

    /// Apply both deltas in one step. Plain addition; counters may go
    /// negative if the caller skipped the availability pre-check.
    pub fn apply_adjustment(&mut self, on_hand_delta: i64, reserved_delta: i64, now: DateTime<Utc>) {
        self.quantity_on_hand += on_hand_delta;
        self.reserved += reserved_delta;
        self.updated_at = now;
    }

    /// Whether the non-negativity invariant holds right now.
    pub fn is_consistent(&self) -> bool {
        self.reserved >= 0 && self.quantity_on_hand >= self.reserved
    }

    /// Whether on-hand stock has fallen to or below the reorder level.
    pub fn needs_reorder(&self) -> bool {
        self.quantity_on_hand <= self.reorder_level
    }
}

/// Validate counters handed to `create` or `set_levels`.
///
/// Negative counters are malformed input; `reserved > on_hand` would start
/// the row in violation of the availability invariant.
pub fn validate_levels(on_hand: i64, reserved: i64, reorder_level: i64) -> ServiceResult<()> {
    if on_hand < 0 || reserved < 0 || reorder_level < 0 {
        return Err(ServiceError::bad_request(
            "inventory counters must be non-negative",
        ));
    }
    if reserved > on_hand {
        return Err(ServiceError::conflict(
            "reserved cannot exceed quantity on hand",
        ));
    }
    Ok(())
}

/// Per-product stock ledger.
///
/// The availability check and the adjustment are separate calls, so the
/// workflow's check-then-adjust sequence is racy by default under
/// concurrent callers. Implementations must still apply each `adjust`
/// atomically, which keeps this boundary narrow enough for a stricter
/// "reserve if available" implementation to slot in behind the same trait.
pub trait InventoryLedger: Send + Sync {
    /// Fetch the counters for a product. `NotFound` if no row exists.
    fn availability(&self, product_id: ProductId) -> ServiceResult<InventoryRecord>;

    /// Apply both deltas in one atomic update. `NotFound` if no row exists.
    ///
    /// Does NOT enforce the non-negativity invariant; callers pre-check
    /// `available()` before reserving.
    fn adjust(
        &self,
        product_id: ProductId,
        on_hand_delta: i64,
        reserved_delta: i64,
    ) -> ServiceResult<()>;

    /// Initialize the row for a product, once, at product-creation time.
    ///
    /// `Conflict` if a row already exists; `BadRequest` for negative
    /// counters or `reserved > on_hand`.
    fn create(
        &self,
        product_id: ProductId,
        on_hand: i64,
        reserved: i64,
        reorder_level: i64,
    ) -> ServiceResult<InventoryRecord>;

    /// Overwrite the counters for an existing row. `NotFound` if absent;
    /// same validation as `create`.
    fn set_levels(
        &self,
        product_id: ProductId,
        on_hand: i64,
        reserved: i64,
        reorder_level: i64,
    ) -> ServiceResult<InventoryRecord>;
}

impl<L> InventoryLedger for Arc<L>
where
    L: InventoryLedger + ?Sized,
{
    fn availability(&self, product_id: ProductId) -> ServiceResult<InventoryRecord> {
        (**self).availability(product_id)
    }

    fn adjust(
        &self,
        product_id: ProductId,
        on_hand_delta: i64,
        reserved_delta: i64,
    ) -> ServiceResult<()> {
        (**self).adjust(product_id, on_hand_delta, reserved_delta)
    }

    fn create(
        &self,
        product_id: ProductId,
        on_hand: i64,
        reserved: i64,
        reorder_level: i64,
    ) -> ServiceResult<InventoryRecord> {
        (**self).create(product_id, on_hand, reserved, reorder_level)
    }

    fn set_levels(
        &self,
        product_id: ProductId,
        on_hand: i64,
        reserved: i64,
        reorder_level: i64,
    ) -> ServiceResult<InventoryRecord> {
        (**self).set_levels(product_id, on_hand, reserved, reorder_level)
    }
}
