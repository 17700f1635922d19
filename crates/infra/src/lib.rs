//! `orderdesk-infra` — concrete collaborator implementations.
//!
//! In-memory stores for tests and development. Each store applies a single
//! call atomically under its lock; nothing here adds cross-call isolation,
//! so the workflow's check-then-adjust race is preserved as the default
//! behavior.

pub mod memory;


pub use memory::{
    InMemoryAuditLog, InMemoryCatalog, InMemoryInventoryLedger, InMemoryOrderStore,
    InMemoryUserDirectory,
};
