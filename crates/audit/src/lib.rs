//! `orderdesk-audit` — append-only audit trail.
//!
//! Pure side-effect sink: one record per mutating action, never mutated or
//! deleted, no effect on business invariants.

pub mod record;

pub use record::{AuditAction, AuditEntity, AuditRecord, AuditSink};
