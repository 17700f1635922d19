use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use orderdesk_core::{ProductId, ServiceResult};

/// Product status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Active,
    Inactive,
}

/// Catalog product.
///
/// The SKU is the immutable business key; `id` is the referential key.
/// Prices are held in the smallest currency unit (e.g., cents) with a
/// 3-letter ISO currency code. Soft-deleted rows stay in storage but are
/// invisible to lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub sku: String,
    pub name: String,
    /// Price in smallest currency unit (e.g., cents).
    pub price: u64,
    pub currency: String,
    pub status: ProductStatus,
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Check if the product can be ordered (must be Active).
    pub fn can_be_ordered(&self) -> bool {
        self.status == ProductStatus::Active && !self.deleted
    }
}

/// Read-only product lookup.
///
/// The workflow treats the catalog as an external collaborator: existence,
/// status, and price are the only facts it consumes. No side effects.
pub trait CatalogLookup: Send + Sync {
    /// Fetch a product by id.
    ///
    /// Fails with `NotFound` if the row is absent or soft-deleted. Status
    /// checks are the caller's concern.
    fn find_by_id(&self, product_id: ProductId) -> ServiceResult<Product>;
}

impl<C> CatalogLookup for Arc<C>
where
    C: CatalogLookup + ?Sized,
{
    fn find_by_id(&self, product_id: ProductId) -> ServiceResult<Product> {
        (**self).find_by_id(product_id)
    }
}
