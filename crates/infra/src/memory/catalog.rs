use std::collections::HashMap;
use std::sync::RwLock;

use orderdesk_catalog::{CatalogLookup, Product};
use orderdesk_core::{ProductId, ServiceError, ServiceResult};

use super::poisoned;

/// In-memory product catalog.
///
/// Lookup hides soft-deleted rows, matching the read contract. Seeding
/// (`insert`/`update`) is an upsert by id; SKU uniqueness is the concern of
/// the out-of-scope product CRUD, not of this lookup.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    products: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a product row.
    pub fn insert(&self, product: Product) -> ServiceResult<()> {
        let mut products = self.products.write().map_err(|_| poisoned())?;
        products.insert(product.id, product);
        Ok(())
    }
}

impl CatalogLookup for InMemoryCatalog {
    fn find_by_id(&self, product_id: ProductId) -> ServiceResult<Product> {
        let products = self.products.read().map_err(|_| poisoned())?;
        products
            .get(&product_id)
            .filter(|p| !p.deleted)
            .cloned()
            .ok_or_else(|| ServiceError::not_found(format!("product not found: {product_id}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use orderdesk_catalog::ProductStatus;

    fn test_product(deleted: bool) -> Product {
        Product {
            id: ProductId::new(),
            sku: "SKU-100".to_string(),
            name: "Widget".to_string(),
            price: 900,
            currency: "VND".to_string(),
            status: ProductStatus::Active,
            deleted,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn find_returns_inserted_product() {
        let catalog = InMemoryCatalog::new();
        let product = test_product(false);
        catalog.insert(product.clone()).unwrap();

        assert_eq!(catalog.find_by_id(product.id).unwrap(), product);
    }

    #[test]
    fn missing_product_is_not_found() {
        let catalog = InMemoryCatalog::new();
        let err = catalog.find_by_id(ProductId::new()).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[test]
    fn soft_deleted_product_is_invisible() {
        let catalog = InMemoryCatalog::new();
        let product = test_product(true);
        catalog.insert(product.clone()).unwrap();

        let err = catalog.find_by_id(product.id).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }
}
