//! In-memory implementations of the workflow's collaborator traits.
//!
//! Intended for tests/dev. Not optimized for performance.

mod audit;
mod catalog;
mod ledger;
mod orders;
mod users;

pub use audit::InMemoryAuditLog;
pub use catalog::InMemoryCatalog;
pub use ledger::InMemoryInventoryLedger;
pub use orders::InMemoryOrderStore;
pub use users::InMemoryUserDirectory;

use orderdesk_core::ServiceError;

pub(crate) fn poisoned() -> ServiceError {
    ServiceError::internal("lock poisoned")
}
