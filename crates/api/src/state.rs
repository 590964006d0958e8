//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::db::{OrderStore, ProductStore, StoreHealth};
use crate::services::{CatalogService, OrderService};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The store is constructed once
/// at startup and injected here; services hold their own handles to it.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    catalog: CatalogService,
    orders: OrderService,
    health: Arc<dyn StoreHealth>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - API configuration
    /// * `store` - Document store backing both collections
    #[must_use]
    pub fn new<S>(config: ApiConfig, store: Arc<S>) -> Self
    where
        S: ProductStore + OrderStore + StoreHealth + 'static,
    {
        let catalog = CatalogService::new(store.clone());
        let orders = OrderService::new(store.clone(), store.clone());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                orders,
                health: store,
            }),
        }
    }

    /// Get a reference to the API configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog service.
    #[must_use]
    pub fn catalog(&self) -> &CatalogService {
        &self.inner.catalog
    }

    /// Get a reference to the order service.
    #[must_use]
    pub fn orders(&self) -> &OrderService {
        &self.inner.orders
    }

    /// Get a reference to the store health probe.
    #[must_use]
    pub fn store_health(&self) -> &dyn StoreHealth {
        self.inner.health.as_ref()
    }
}
