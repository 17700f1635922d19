use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use orderdesk_core::{AuditRecordId, ServiceResult, UserId};

/// What happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    Create,
    Cancel,
}

/// What it happened to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditEntity {
    Order,
    Product,
}

/// Append-only audit fact: who did what to which entity, when.
///
/// `actor` is `None` for system-initiated actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub id: AuditRecordId,
    pub actor: Option<UserId>,
    pub action: AuditAction,
    pub entity: AuditEntity,
    pub entity_id: Uuid,
    pub recorded_at: DateTime<Utc>,
}

impl AuditRecord {
    pub fn new(
        actor: Option<UserId>,
        action: AuditAction,
        entity: AuditEntity,
        entity_id: Uuid,
    ) -> Self {
        Self {
            id: AuditRecordId::new(),
            actor,
            action,
            entity,
            entity_id,
            recorded_at: Utc::now(),
        }
    }
}

/// Fire-and-forget audit sink.
///
/// Writes are best-effort: the workflow logs a failure and carries on, so
/// implementations must never be load-bearing for business state.
pub trait AuditSink: Send + Sync {
    fn record(&self, record: AuditRecord) -> ServiceResult<()>;
}

impl<A> AuditSink for Arc<A>
where
    A: AuditSink + ?Sized,
{
    fn record(&self, record: AuditRecord) -> ServiceResult<()> {
        (**self).record(record)
    }
}
