use serde::{Deserialize, Serialize};
use std::sync::Arc;

use orderdesk_core::{OrderId, ProductId, ServiceResult, UserId};

use crate::order::{Order, OrderLine, OrderStatus};

/// Order header as handed to the store, before identity and timestamps
/// are assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub order_number: String,
    pub user_id: UserId,
    pub status: OrderStatus,
    pub total_amount: u64,
    pub currency: String,
}

/// Order line as handed to the store, before identity is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineDraft {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub unit_price: u64,
    pub line_total: u64,
}

/// Persistence contract for orders and their lines.
///
/// The store assigns identity and timestamps. There is no uniqueness
/// constraint on (order, product): duplicate lines for the same product
/// are kept distinct. Each call is its own commit boundary; the workflow
/// deliberately does not get a cross-call transaction (see the workflow's
/// partial-failure contract).
pub trait OrderStore: Send + Sync {
    /// Persist an order header, assigning id and created/updated timestamps.
    fn create(&self, draft: OrderDraft) -> ServiceResult<Order>;

    /// Append a line to an existing order. `NotFound` if the order is absent.
    fn add_line(&self, draft: OrderLineDraft) -> ServiceResult<OrderLine>;

    /// Fetch a header by id; `None` when absent (the workflow decides the
    /// error shape).
    fn find_by_id(&self, order_id: OrderId) -> ServiceResult<Option<Order>>;

    /// All lines of an order, in insertion order.
    fn find_lines_by_order_id(&self, order_id: OrderId) -> ServiceResult<Vec<OrderLine>>;

    /// All orders owned by a user, newest first.
    fn find_by_user_id(&self, user_id: UserId) -> ServiceResult<Vec<Order>>;

    /// Update status and bump `updated_at`. `NotFound` if the order is absent.
    fn update_status(&self, order_id: OrderId, status: OrderStatus) -> ServiceResult<()>;

    /// Update the total and bump `updated_at`. `NotFound` if the order is absent.
    fn update_total(&self, order_id: OrderId, total_amount: u64) -> ServiceResult<()>;
}

impl<S> OrderStore for Arc<S>
where
    S: OrderStore + ?Sized,
{
    fn create(&self, draft: OrderDraft) -> ServiceResult<Order> {
        (**self).create(draft)
    }

    fn add_line(&self, draft: OrderLineDraft) -> ServiceResult<OrderLine> {
        (**self).add_line(draft)
    }

    fn find_by_id(&self, order_id: OrderId) -> ServiceResult<Option<Order>> {
        (**self).find_by_id(order_id)
    }

    fn find_lines_by_order_id(&self, order_id: OrderId) -> ServiceResult<Vec<OrderLine>> {
        (**self).find_lines_by_order_id(order_id)
    }

    fn find_by_user_id(&self, user_id: UserId) -> ServiceResult<Vec<Order>> {
        (**self).find_by_user_id(user_id)
    }

    fn update_status(&self, order_id: OrderId, status: OrderStatus) -> ServiceResult<()> {
        (**self).update_status(order_id, status)
    }

    fn update_total(&self, order_id: OrderId, total_amount: u64) -> ServiceResult<()> {
        (**self).update_total(order_id, total_amount)
    }
}
