use std::sync::RwLock;

use orderdesk_audit::{AuditRecord, AuditSink};
use orderdesk_core::ServiceResult;

use super::poisoned;

/// In-memory append-only audit log.
#[derive(Debug, Default)]
pub struct InMemoryAuditLog {
    records: RwLock<Vec<AuditRecord>>,
}

impl InMemoryAuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far, in append order.
    pub fn records(&self) -> ServiceResult<Vec<AuditRecord>> {
        let records = self.records.read().map_err(|_| poisoned())?;
        Ok(records.clone())
    }
}

impl AuditSink for InMemoryAuditLog {
    fn record(&self, record: AuditRecord) -> ServiceResult<()> {
        let mut records = self.records.write().map_err(|_| poisoned())?;
        records.push(record);
        Ok(())
    }
}
