//! `orderdesk-orders` — order records, the store contract, and the
//! order-creation / cancellation workflow.
//!
//! The workflow is the engine of the system: it validates a request against
//! the catalog and the inventory ledger, commits stock consumption line by
//! line, computes the total, and reverses consumption on cancellation. The
//! catalog, ledger, user directory, order store, and audit sink are all
//! collaborator traits, injected at construction.

pub mod order;
pub mod store;
pub mod workflow;

pub use order::{generate_order_number, Order, OrderLine, OrderStatus};
pub use store::{OrderDraft, OrderLineDraft, OrderStore};
pub use workflow::{
    CreateOrderRequest, OrderDetails, OrderLineRequest, OrderLineView, OrderWorkflow,
};
