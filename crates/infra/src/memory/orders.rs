use std::sync::RwLock;

use chrono::Utc;

use orderdesk_core::{OrderId, OrderLineId, ServiceError, ServiceResult, UserId};
use orderdesk_orders::{Order, OrderDraft, OrderLine, OrderLineDraft, OrderStatus, OrderStore};

use super::poisoned;

/// In-memory order store.
///
/// Orders and lines are kept in insertion order; "newest first" for the
/// per-user listing is the reverse of insertion, which also breaks ties
/// between orders created in the same instant.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    orders: RwLock<Vec<Order>>,
    lines: RwLock<Vec<OrderLine>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn missing(order_id: OrderId) -> ServiceError {
        ServiceError::not_found(format!("order not found: {order_id}"))
    }
}

impl OrderStore for InMemoryOrderStore {
    fn create(&self, draft: OrderDraft) -> ServiceResult<Order> {
        let now = Utc::now();
        let order = Order {
            id: OrderId::new(),
            order_number: draft.order_number,
            user_id: draft.user_id,
            status: draft.status,
            total_amount: draft.total_amount,
            currency: draft.currency,
            created_at: now,
            updated_at: now,
        };

        let mut orders = self.orders.write().map_err(|_| poisoned())?;
        orders.push(order.clone());
        Ok(order)
    }

    fn add_line(&self, draft: OrderLineDraft) -> ServiceResult<OrderLine> {
        {
            let orders = self.orders.read().map_err(|_| poisoned())?;
            if !orders.iter().any(|o| o.id == draft.order_id) {
                return Err(Self::missing(draft.order_id));
            }
        }

        let line = OrderLine {
            id: OrderLineId::new(),
            order_id: draft.order_id,
            product_id: draft.product_id,
            quantity: draft.quantity,
            unit_price: draft.unit_price,
            line_total: draft.line_total,
        };

        let mut lines = self.lines.write().map_err(|_| poisoned())?;
        lines.push(line.clone());
        Ok(line)
    }

    fn find_by_id(&self, order_id: OrderId) -> ServiceResult<Option<Order>> {
        let orders = self.orders.read().map_err(|_| poisoned())?;
        Ok(orders.iter().find(|o| o.id == order_id).cloned())
    }

    fn find_lines_by_order_id(&self, order_id: OrderId) -> ServiceResult<Vec<OrderLine>> {
        let lines = self.lines.read().map_err(|_| poisoned())?;
        Ok(lines
            .iter()
            .filter(|l| l.order_id == order_id)
            .cloned()
            .collect())
    }

    fn find_by_user_id(&self, user_id: UserId) -> ServiceResult<Vec<Order>> {
        let orders = self.orders.read().map_err(|_| poisoned())?;
        Ok(orders
            .iter()
            .rev()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect())
    }

    fn update_status(&self, order_id: OrderId, status: OrderStatus) -> ServiceResult<()> {
        let mut orders = self.orders.write().map_err(|_| poisoned())?;
        let order = orders
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or_else(|| Self::missing(order_id))?;
        order.status = status;
        order.updated_at = Utc::now();
        Ok(())
    }

    fn update_total(&self, order_id: OrderId, total_amount: u64) -> ServiceResult<()> {
        let mut orders = self.orders.write().map_err(|_| poisoned())?;
        let order = orders
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or_else(|| Self::missing(order_id))?;
        order.total_amount = total_amount;
        order.updated_at = Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orderdesk_core::ProductId;

    fn draft(user_id: UserId) -> OrderDraft {
        OrderDraft {
            order_number: "ORD-20260826-00001".to_string(),
            user_id,
            status: OrderStatus::Pending,
            total_amount: 100,
            currency: "VND".to_string(),
        }
    }

    fn line_draft(order_id: OrderId) -> OrderLineDraft {
        OrderLineDraft {
            order_id,
            product_id: ProductId::new(),
            quantity: 2,
            unit_price: 50,
            line_total: 100,
        }
    }

    #[test]
    fn create_assigns_identity_and_timestamps() {
        let store = InMemoryOrderStore::new();
        let order = store.create(draft(UserId::new())).unwrap();

        assert_eq!(order.created_at, order.updated_at);
        assert_eq!(store.find_by_id(order.id).unwrap(), Some(order));
    }

    #[test]
    fn add_line_to_missing_order_is_not_found() {
        let store = InMemoryOrderStore::new();
        let err = store.add_line(line_draft(OrderId::new())).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[test]
    fn duplicate_product_lines_are_kept_distinct() {
        let store = InMemoryOrderStore::new();
        let order = store.create(draft(UserId::new())).unwrap();

        let one = line_draft(order.id);
        store.add_line(one.clone()).unwrap();
        store.add_line(one).unwrap();

        let lines = store.find_lines_by_order_id(order.id).unwrap();
        assert_eq!(lines.len(), 2);
        assert_ne!(lines[0].id, lines[1].id);
        assert_eq!(lines[0].product_id, lines[1].product_id);
    }

    #[test]
    fn find_by_user_is_newest_first() {
        let store = InMemoryOrderStore::new();
        let user = UserId::new();
        let first = store.create(draft(user)).unwrap();
        let second = store.create(draft(user)).unwrap();
        store.create(draft(UserId::new())).unwrap();

        let listed = store.find_by_user_id(user).unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);
    }

    #[test]
    fn update_status_bumps_updated_at() {
        let store = InMemoryOrderStore::new();
        let order = store.create(draft(UserId::new())).unwrap();

        store
            .update_status(order.id, OrderStatus::Cancelled)
            .unwrap();
        let stored = store.find_by_id(order.id).unwrap().unwrap();
        assert_eq!(stored.status, OrderStatus::Cancelled);
        assert!(stored.updated_at >= order.updated_at);
    }

    #[test]
    fn update_total_overwrites_amount() {
        let store = InMemoryOrderStore::new();
        let order = store.create(draft(UserId::new())).unwrap();

        store.update_total(order.id, 999).unwrap();
        assert_eq!(
            store.find_by_id(order.id).unwrap().unwrap().total_amount,
            999
        );
    }
}
