use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;

use orderdesk_core::{ProductId, ServiceError, ServiceResult};
use orderdesk_inventory::{validate_levels, InventoryLedger, InventoryRecord};

use super::poisoned;

/// In-memory inventory ledger.
///
/// Each call runs under the write lock, so a single `adjust` is atomic.
/// Nothing serializes a caller's availability check with its subsequent
/// adjust; that race lives at the workflow level and is preserved here.
#[derive(Debug, Default)]
pub struct InMemoryInventoryLedger {
    records: RwLock<HashMap<ProductId, InventoryRecord>>,
}

impl InMemoryInventoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    fn missing(product_id: ProductId) -> ServiceError {
        ServiceError::not_found(format!("inventory not found for product: {product_id}"))
    }
}

impl InventoryLedger for InMemoryInventoryLedger {
    fn availability(&self, product_id: ProductId) -> ServiceResult<InventoryRecord> {
        let records = self.records.read().map_err(|_| poisoned())?;
        records
            .get(&product_id)
            .copied()
            .ok_or_else(|| Self::missing(product_id))
    }

    fn adjust(
        &self,
        product_id: ProductId,
        on_hand_delta: i64,
        reserved_delta: i64,
    ) -> ServiceResult<()> {
        let mut records = self.records.write().map_err(|_| poisoned())?;
        let record = records
            .get_mut(&product_id)
            .ok_or_else(|| Self::missing(product_id))?;
        record.apply_adjustment(on_hand_delta, reserved_delta, Utc::now());
        Ok(())
    }

    fn create(
        &self,
        product_id: ProductId,
        on_hand: i64,
        reserved: i64,
        reorder_level: i64,
    ) -> ServiceResult<InventoryRecord> {
        validate_levels(on_hand, reserved, reorder_level)?;

        let mut records = self.records.write().map_err(|_| poisoned())?;
        if records.contains_key(&product_id) {
            return Err(ServiceError::conflict(format!(
                "inventory already exists for product: {product_id}"
            )));
        }

        let record = InventoryRecord {
            product_id,
            quantity_on_hand: on_hand,
            reserved,
            reorder_level,
            updated_at: Utc::now(),
        };
        records.insert(product_id, record);
        Ok(record)
    }

    fn set_levels(
        &self,
        product_id: ProductId,
        on_hand: i64,
        reserved: i64,
        reorder_level: i64,
    ) -> ServiceResult<InventoryRecord> {
        validate_levels(on_hand, reserved, reorder_level)?;

        let mut records = self.records.write().map_err(|_| poisoned())?;
        let record = records
            .get_mut(&product_id)
            .ok_or_else(|| Self::missing(product_id))?;
        record.quantity_on_hand = on_hand;
        record.reserved = reserved;
        record.reorder_level = reorder_level;
        record.updated_at = Utc::now();
        Ok(*record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_then_read_back() {
        let ledger = InMemoryInventoryLedger::new();
        let pid = ProductId::new();

        ledger.create(pid, 10, 2, 3).unwrap();
        let rec = ledger.availability(pid).unwrap();
        assert_eq!(rec.quantity_on_hand, 10);
        assert_eq!(rec.reserved, 2);
        assert_eq!(rec.reorder_level, 3);
        assert_eq!(rec.available(), 8);
    }

    #[test]
    fn create_twice_is_conflict() {
        let ledger = InMemoryInventoryLedger::new();
        let pid = ProductId::new();

        ledger.create(pid, 10, 0, 0).unwrap();
        let err = ledger.create(pid, 5, 0, 0).unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[test]
    fn create_rejects_invalid_levels() {
        let ledger = InMemoryInventoryLedger::new();
        assert!(matches!(
            ledger.create(ProductId::new(), -1, 0, 0),
            Err(ServiceError::BadRequest(_))
        ));
        assert!(matches!(
            ledger.create(ProductId::new(), 3, 4, 0),
            Err(ServiceError::Conflict(_))
        ));
    }

    #[test]
    fn adjust_applies_both_deltas() {
        let ledger = InMemoryInventoryLedger::new();
        let pid = ProductId::new();
        ledger.create(pid, 10, 0, 0).unwrap();

        ledger.adjust(pid, -3, 2).unwrap();
        let rec = ledger.availability(pid).unwrap();
        assert_eq!(rec.quantity_on_hand, 7);
        assert_eq!(rec.reserved, 2);
    }

    #[test]
    fn adjust_does_not_enforce_non_negativity() {
        let ledger = InMemoryInventoryLedger::new();
        let pid = ProductId::new();
        ledger.create(pid, 1, 0, 0).unwrap();

        // Caller skipped the availability pre-check; the ledger obliges.
        ledger.adjust(pid, -5, 0).unwrap();
        assert_eq!(ledger.availability(pid).unwrap().quantity_on_hand, -4);
    }

    #[test]
    fn adjust_unknown_product_is_not_found() {
        let ledger = InMemoryInventoryLedger::new();
        let err = ledger.adjust(ProductId::new(), 1, 0).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[test]
    fn set_levels_overwrites_counters() {
        let ledger = InMemoryInventoryLedger::new();
        let pid = ProductId::new();
        ledger.create(pid, 10, 0, 0).unwrap();

        let rec = ledger.set_levels(pid, 20, 5, 8).unwrap();
        assert_eq!(rec.quantity_on_hand, 20);
        assert_eq!(rec.reserved, 5);
        assert_eq!(rec.reorder_level, 8);
    }

    #[test]
    fn set_levels_unknown_product_is_not_found() {
        let ledger = InMemoryInventoryLedger::new();
        let err = ledger.set_levels(ProductId::new(), 1, 0, 0).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }
}
