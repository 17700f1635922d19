//! `orderdesk-core` — shared foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no storage concerns):
//! typed identifiers, the service error model, and shared constants.

pub mod error;
pub mod id;

pub use error::{ServiceError, ServiceResult};
pub use id::{AuditRecordId, OrderId, OrderLineId, ProductId, UserId};

/// Currency applied when an order request does not name one.
pub const DEFAULT_CURRENCY: &str = "VND";
