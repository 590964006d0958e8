//! Read-only catalog queries.

use std::sync::Arc;

use tracing::instrument;

use mangal_chai_core::{Product, ProductId};

use super::ServiceError;
use crate::db::ProductStore;

/// Catalog queries over the `products` collection.
#[derive(Clone)]
pub struct CatalogService {
    products: Arc<dyn ProductStore>,
}

impl CatalogService {
    /// Create a catalog service over an injected product store.
    #[must_use]
    pub fn new(products: Arc<dyn ProductStore>) -> Self {
        Self { products }
    }

    /// All products, in store order.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Repository` if the store query fails.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, ServiceError> {
        Ok(self.products.list().await?)
    }

    /// The product with `id`.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::ProductNotFound` if no product has that id.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_product(&self, id: &ProductId) -> Result<Product, ServiceError> {
        self.products
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::ProductNotFound(id.clone()))
    }

    /// Products in `category`. Matching is exact and case-sensitive; an
    /// unknown category yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Repository` if the store query fails.
    #[instrument(skip(self))]
    pub async fn list_products_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, ServiceError> {
        Ok(self.products.list_by_category(category).await?)
    }

    /// Distinct categories across all products.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Repository` if the store query fails.
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Vec<String>, ServiceError> {
        Ok(self.products.categories().await?)
    }
}
