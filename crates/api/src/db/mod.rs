//! Document store access.
//!
//! # Collections
//!
//! - `products` - Catalog documents, keyed by application-assigned `id`
//! - `orders` - Placed orders, keyed by application-assigned `id`
//!
//! Each collection is a `PostgreSQL` table holding one JSONB document per row.
//! The table's own `seq` column is the store-native ordering key and is never
//! exposed outside this module.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/api/migrations/` and run via:
//! ```bash
//! cargo run -p mangal-chai-cli -- migrate
//! ```
//! or automatically at startup unless `RUN_MIGRATIONS=false`.
//!
//! # Seams
//!
//! Services depend on the [`ProductStore`] and [`OrderStore`] traits, not on
//! `PostgreSQL`, so tests can swap in the in-memory store.

#[cfg(any(test, feature = "test-helpers"))]
pub mod memory;
pub mod postgres;

use std::time::Duration;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use mangal_chai_core::{Order, OrderId, Product, ProductId};

#[cfg(any(test, feature = "test-helpers"))]
pub use memory::MemoryStore;
pub use postgres::PgDocumentStore;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored document does not match its record type.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Constraint violation (e.g., duplicate document id).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Read and seed access to the `products` collection.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All products in store-native order.
    async fn list(&self) -> Result<Vec<Product>, RepositoryError>;

    /// The product with `id`, if any.
    async fn get(&self, id: &ProductId) -> Result<Option<Product>, RepositoryError>;

    /// Products whose category equals `category` exactly.
    async fn list_by_category(&self, category: &str) -> Result<Vec<Product>, RepositoryError>;

    /// Distinct category values.
    async fn categories(&self) -> Result<Vec<String>, RepositoryError>;

    /// Number of stored products.
    async fn count(&self) -> Result<u64, RepositoryError>;

    /// Insert all of `products` or none of them.
    async fn insert_many(&self, products: &[Product]) -> Result<(), RepositoryError>;
}

/// Write-once access to the `orders` collection.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persist a new order as a single document write.
    async fn insert(&self, order: &Order) -> Result<(), RepositoryError>;

    /// The order with `id`, if any.
    async fn get(&self, id: &OrderId) -> Result<Option<Order>, RepositoryError>;
}

/// Connectivity probe used by the readiness endpoint.
#[async_trait]
pub trait StoreHealth: Send + Sync {
    /// Succeeds when the store answers a trivial round trip.
    async fn ping(&self) -> Result<(), RepositoryError>;
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
/// * `max_connections` - Upper bound on pooled connections
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(
    database_url: &secrecy::SecretString,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Apply any pending migrations from `crates/api/migrations/`.
///
/// # Errors
///
/// Returns `MigrateError` if a migration fails or the history is inconsistent.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
