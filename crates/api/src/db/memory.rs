//! In-memory document store for tests.
//!
//! Mirrors the `PostgreSQL` store's observable behaviour: insertion order is
//! store-native order, category matching is exact, and `insert_many` is
//! all-or-nothing. It can also simulate an unreachable store.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use mangal_chai_core::{Order, OrderId, Price, Product, ProductId};

use super::{OrderStore, ProductStore, RepositoryError, StoreHealth};

/// Document store held in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    products: RwLock<Vec<Product>>,
    orders: RwLock<Vec<Order>>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `products`.
    #[must_use]
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
            ..Self::default()
        }
    }

    /// Make every subsequent call fail as if the database were down.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Flip a product's stock flag. Returns `false` if the product is unknown.
    pub async fn set_in_stock(&self, id: &ProductId, in_stock: bool) -> bool {
        self.update_product(id, |product| product.in_stock = in_stock)
            .await
    }

    /// Change a product's price. Returns `false` if the product is unknown.
    pub async fn set_price(&self, id: &ProductId, price: Price) -> bool {
        self.update_product(id, |product| product.price = price).await
    }

    /// Remove every product, as a manual cleanup would.
    pub async fn clear_products(&self) {
        self.products.write().await.clear();
    }

    /// Number of persisted orders.
    pub async fn order_count(&self) -> usize {
        self.orders.read().await.len()
    }

    async fn update_product(&self, id: &ProductId, f: impl FnOnce(&mut Product)) -> bool {
        let mut products = self.products.write().await;
        products
            .iter_mut()
            .find(|product| &product.id == id)
            .map(f)
            .is_some()
    }

    fn check_available(&self) -> Result<(), RepositoryError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(RepositoryError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        self.check_available()?;
        Ok(self.products.read().await.clone())
    }

    async fn get(&self, id: &ProductId) -> Result<Option<Product>, RepositoryError> {
        self.check_available()?;
        let products = self.products.read().await;
        Ok(products.iter().find(|product| &product.id == id).cloned())
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Product>, RepositoryError> {
        self.check_available()?;
        let products = self.products.read().await;
        Ok(products
            .iter()
            .filter(|product| product.category == category)
            .cloned()
            .collect())
    }

    async fn categories(&self) -> Result<Vec<String>, RepositoryError> {
        self.check_available()?;
        let products = self.products.read().await;
        let mut categories: Vec<String> = Vec::new();
        for product in products.iter() {
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }
        Ok(categories)
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        self.check_available()?;
        Ok(self.products.read().await.len() as u64)
    }

    async fn insert_many(&self, new_products: &[Product]) -> Result<(), RepositoryError> {
        self.check_available()?;
        let mut products = self.products.write().await;
        for (index, product) in new_products.iter().enumerate() {
            let duplicate_in_store = products.iter().any(|existing| existing.id == product.id);
            let duplicate_in_batch = new_products
                .iter()
                .take(index)
                .any(|earlier| earlier.id == product.id);
            if duplicate_in_store || duplicate_in_batch {
                return Err(RepositoryError::Conflict(format!(
                    "product {} already exists",
                    product.id
                )));
            }
        }
        products.extend_from_slice(new_products);
        Ok(())
    }
}

#[async_trait]
impl OrderStore for MemoryStore {
    async fn insert(&self, order: &Order) -> Result<(), RepositoryError> {
        self.check_available()?;
        let mut orders = self.orders.write().await;
        if orders.iter().any(|existing| existing.id == order.id) {
            return Err(RepositoryError::Conflict(format!(
                "order {} already exists",
                order.id
            )));
        }
        orders.push(order.clone());
        Ok(())
    }

    async fn get(&self, id: &OrderId) -> Result<Option<Order>, RepositoryError> {
        self.check_available()?;
        let orders = self.orders.read().await;
        Ok(orders.iter().find(|order| &order.id == id).cloned())
    }
}

#[async_trait]
impl StoreHealth for MemoryStore {
    async fn ping(&self) -> Result<(), RepositoryError> {
        self.check_available()
    }
}
