use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use orderdesk_core::{OrderId, OrderLineId, ProductId, ServiceError, ServiceResult, UserId};

/// Order status lifecycle.
///
/// The workflow creates orders as `Pending` and may move them to
/// `Cancelled`. `Shipped` is set by fulfillment, outside this system, and
/// is terminal here along with `Cancelled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Cancelled,
    Shipped,
}

/// Order header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// Human-readable label. Collision-tolerant, not a uniqueness key;
    /// use `id` for all referential purposes.
    pub order_number: String,
    pub user_id: UserId,
    pub status: OrderStatus,
    /// Sum of line totals, in smallest currency unit.
    pub total_amount: u64,
    pub currency: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Guard for cancellation: only `Pending` orders may be cancelled.
    pub fn ensure_cancellable(&self) -> ServiceResult<()> {
        match self.status {
            OrderStatus::Cancelled => Err(ServiceError::bad_request("order is already cancelled")),
            OrderStatus::Shipped => {
                Err(ServiceError::bad_request("cannot cancel a shipped order"))
            }
            OrderStatus::Pending => Ok(()),
        }
    }
}

/// One line of an order: product, quantity, and the price snapshot taken
/// at order time. Later price changes do not touch existing lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: OrderLineId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: u32,
    /// Unit price snapshot, in smallest currency unit.
    pub unit_price: u64,
    pub line_total: u64,
}

/// Generate the display order number: `ORD-yyyymmdd-NNNNN`.
///
/// The suffix is wall-clock millis modulo 100000, zero-padded. Two orders
/// in the same millisecond collide; that is accepted because the number is
/// a display label only.
pub fn generate_order_number(now: DateTime<Utc>) -> String {
    let suffix = now.timestamp_millis().rem_euclid(100_000);
    format!("ORD-{}-{:05}", now.format("%Y%m%d"), suffix)
}
