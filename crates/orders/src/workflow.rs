use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use orderdesk_audit::{AuditAction, AuditEntity, AuditRecord, AuditSink};
use orderdesk_catalog::CatalogLookup;
use orderdesk_core::{
    OrderId, ProductId, ServiceError, ServiceResult, UserId, DEFAULT_CURRENCY,
};
use orderdesk_inventory::InventoryLedger;
use orderdesk_parties::UserDirectory;

use crate::order::{generate_order_number, Order, OrderLine, OrderStatus};
use crate::store::{OrderDraft, OrderLineDraft, OrderStore};

/// One requested line: which product, how many.
///
/// Quantity is `>= 1` by the caller's schema contract; the workflow does
/// not re-validate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineRequest {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Order-creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub user_id: UserId,
    /// Defaults to [`DEFAULT_CURRENCY`] when absent.
    pub currency: Option<String>,
    pub lines: Vec<OrderLineRequest>,
}

/// Line as projected into responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineView {
    pub product_id: ProductId,
    pub quantity: u32,
    pub unit_price: u64,
    pub line_total: u64,
}

impl From<OrderLine> for OrderLineView {
    fn from(line: OrderLine) -> Self {
        Self {
            product_id: line.product_id,
            quantity: line.quantity,
            unit_price: line.unit_price,
            line_total: line.line_total,
        }
    }
}

/// Fully composed order: header plus all lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDetails {
    pub id: OrderId,
    pub order_number: String,
    pub user_id: UserId,
    pub status: OrderStatus,
    pub total_amount: u64,
    pub currency: String,
    pub lines: Vec<OrderLineView>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrderDetails {
    fn compose(order: Order, lines: Vec<OrderLine>) -> Self {
        Self {
            id: order.id,
            order_number: order.order_number,
            user_id: order.user_id,
            status: order.status,
            total_amount: order.total_amount,
            currency: order.currency,
            lines: lines.into_iter().map(OrderLineView::from).collect(),
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

pub(crate) fn line_total(unit_price: u64, quantity: u32) -> u64 {
    unit_price * u64::from(quantity)
}

/// The order-creation and inventory-reservation engine.
///
/// Stock consumption is committed line by line in two passes: a first-pass
/// reservation (`reserved += qty`) while validating, then a consumption
/// (`on_hand -= qty`, `reserved -= qty`) while persisting lines. The net
/// effect of a successful order leaves `reserved` at its baseline and
/// removes exactly the ordered quantities from on-hand.
///
/// There is no transaction spanning the line loop: the first violated
/// precondition aborts the call and earlier lines' reservations stay
/// applied. Cancellation reverses consumption by restocking on-hand only.
pub struct OrderWorkflow<S, C, L, U, A> {
    store: S,
    catalog: C,
    ledger: L,
    users: U,
    audit: A,
}

impl<S, C, L, U, A> OrderWorkflow<S, C, L, U, A>
where
    S: OrderStore,
    C: CatalogLookup,
    L: InventoryLedger,
    U: UserDirectory,
    A: AuditSink,
{
    pub fn new(store: S, catalog: C, ledger: L, users: U, audit: A) -> Self {
        Self {
            store,
            catalog,
            ledger,
            users,
            audit,
        }
    }

    /// Validate the request, reserve and consume stock per line, persist the
    /// order and its lines, and return the composed result.
    pub fn create_order(&self, request: CreateOrderRequest) -> ServiceResult<OrderDetails> {
        if request.lines.is_empty() {
            return Err(ServiceError::bad_request(
                "order must contain at least one line",
            ));
        }
        if !self.users.exists(request.user_id)? {
            return Err(ServiceError::not_found(format!(
                "user not found: {}",
                request.user_id
            )));
        }

        // First pass: validate each line and claim its quantity.
        let mut total: u64 = 0;
        for line in &request.lines {
            let product = self.catalog.find_by_id(line.product_id)?;
            if !product.can_be_ordered() {
                return Err(ServiceError::conflict(format!(
                    "product is not ACTIVE: {}",
                    product.sku
                )));
            }

            let stock = self.ledger.availability(product.id)?;
            if stock.available() < i64::from(line.quantity) {
                return Err(ServiceError::conflict(format!(
                    "insufficient stock for SKU: {}",
                    product.sku
                )));
            }

            self.ledger.adjust(product.id, 0, i64::from(line.quantity))?;
            total += line_total(product.price, line.quantity);
        }

        let currency = request
            .currency
            .clone()
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
        let order = self.store.create(OrderDraft {
            order_number: generate_order_number(Utc::now()),
            user_id: request.user_id,
            status: OrderStatus::Pending,
            total_amount: total,
            currency,
        })?;

        // Second pass: persist lines and consume the reservations. The
        // price snapshot is taken from this read, not the first pass.
        for line in &request.lines {
            let product = self.catalog.find_by_id(line.product_id)?;
            self.store.add_line(OrderLineDraft {
                order_id: order.id,
                product_id: product.id,
                quantity: line.quantity,
                unit_price: product.price,
                line_total: line_total(product.price, line.quantity),
            })?;
            self.ledger.adjust(
                product.id,
                -i64::from(line.quantity),
                -i64::from(line.quantity),
            )?;
        }

        info!(
            order_id = %order.id,
            order_number = %order.order_number,
            total_amount = order.total_amount,
            line_count = request.lines.len(),
            "order created"
        );
        self.audit_best_effort(AuditRecord::new(
            Some(request.user_id),
            AuditAction::Create,
            AuditEntity::Order,
            *order.id.as_uuid(),
        ));

        self.get_order(order.id)
    }

    /// Fetch header and lines for one order.
    pub fn get_order(&self, order_id: OrderId) -> ServiceResult<OrderDetails> {
        let order = self.fetch_order(order_id)?;
        let lines = self.store.find_lines_by_order_id(order.id)?;
        Ok(OrderDetails::compose(order, lines))
    }

    /// All orders of a user, newest first. `NotFound` if the user is unknown.
    pub fn orders_for_user(&self, user_id: UserId) -> ServiceResult<Vec<OrderDetails>> {
        if !self.users.exists(user_id)? {
            return Err(ServiceError::not_found(format!(
                "user not found: {user_id}"
            )));
        }

        self.store
            .find_by_user_id(user_id)?
            .into_iter()
            .map(|order| {
                let lines = self.store.find_lines_by_order_id(order.id)?;
                Ok(OrderDetails::compose(order, lines))
            })
            .collect()
    }

    /// Cancel a pending order: restock every line, flip status to
    /// `Cancelled`, emit an audit record.
    pub fn cancel_order(&self, order_id: OrderId) -> ServiceResult<()> {
        let order = self.fetch_order(order_id)?;
        order.ensure_cancellable()?;

        for line in self.store.find_lines_by_order_id(order.id)? {
            // Restock on-hand only; reserved was already zeroed when the
            // order consumed its reservations.
            self.ledger
                .adjust(line.product_id, i64::from(line.quantity), 0)?;
        }

        self.store.update_status(order.id, OrderStatus::Cancelled)?;

        info!(order_id = %order.id, order_number = %order.order_number, "order cancelled");
        self.audit_best_effort(AuditRecord::new(
            Some(order.user_id),
            AuditAction::Cancel,
            AuditEntity::Order,
            *order.id.as_uuid(),
        ));

        Ok(())
    }

    fn fetch_order(&self, order_id: OrderId) -> ServiceResult<Order> {
        self.store
            .find_by_id(order_id)?
            .ok_or_else(|| ServiceError::not_found(format!("order not found: {order_id}")))
    }

    fn audit_best_effort(&self, record: AuditRecord) {
        if let Err(err) = self.audit.record(record) {
            warn!(%err, "audit write failed; continuing");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_total_is_price_times_quantity() {
        assert_eq!(line_total(1500, 3), 4500);
        assert_eq!(line_total(0, 10), 0);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: splitting a quantity across two lines of the same
            /// product yields the same combined total as one line.
            #[test]
            fn line_total_is_linear_in_quantity(
                price in 0u64..1_000_000,
                a in 1u32..1_000,
                b in 1u32..1_000,
            ) {
                prop_assert_eq!(
                    line_total(price, a) + line_total(price, b),
                    line_total(price, a + b)
                );
            }
        }
    }
}
