//! `orderdesk-catalog` — read-only product catalog consumed by the order
//! workflow.

pub mod product;

pub use product::{CatalogLookup, Product, ProductStatus};
