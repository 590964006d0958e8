//! `PostgreSQL`-backed document store.
//!
//! Documents are written with `sqlx::types::Json` and read back as raw JSON so
//! that a document which no longer matches its record type is reported with
//! its id instead of failing the whole query.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use sqlx::PgPool;
use sqlx::types::Json;

use mangal_chai_core::{Order, OrderId, Product, ProductId};

use super::{OrderStore, ProductStore, RepositoryError, StoreHealth};

type DocumentRow = (String, serde_json::Value);

/// Document store over a `PostgreSQL` pool.
#[derive(Debug, Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    /// Create a new store over an existing pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgDocumentStore {
    async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, DocumentRow>(
            r"
            SELECT id, document
            FROM products
            ORDER BY seq
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        decode_all("product", rows)
    }

    async fn get(&self, id: &ProductId) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query_as::<_, DocumentRow>(
            r"
            SELECT id, document
            FROM products
            WHERE id = $1
            ",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|(id, document)| decode("product", &id, document))
            .transpose()
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, DocumentRow>(
            r"
            SELECT id, document
            FROM products
            WHERE document->>'category' = $1
            ORDER BY seq
            ",
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        decode_all("product", rows)
    }

    async fn categories(&self) -> Result<Vec<String>, RepositoryError> {
        // First-seen order keeps the response stable across calls.
        let categories = sqlx::query_scalar::<_, String>(
            r"
            SELECT category
            FROM (
                SELECT document->>'category' AS category, MIN(seq) AS first_seq
                FROM products
                WHERE document->>'category' IS NOT NULL
                GROUP BY document->>'category'
            ) AS c
            ORDER BY first_seq
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        u64::try_from(count)
            .map_err(|_| RepositoryError::DataCorruption(format!("negative row count {count}")))
    }

    async fn insert_many(&self, products: &[Product]) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;

        for product in products {
            sqlx::query(
                r"
                INSERT INTO products (id, document)
                VALUES ($1, $2)
                ",
            )
            .bind(product.id.as_str())
            .bind(Json(product))
            .execute(&mut *tx)
            .await
            .map_err(|e| conflict_or_database(e, "product", product.id.as_str()))?;
        }

        tx.commit().await?;
        Ok(())
    }
}

#[async_trait]
impl OrderStore for PgDocumentStore {
    async fn insert(&self, order: &Order) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO orders (id, document)
            VALUES ($1, $2)
            ",
        )
        .bind(order.id.as_str())
        .bind(Json(order))
        .execute(&self.pool)
        .await
        .map_err(|e| conflict_or_database(e, "order", order.id.as_str()))?;

        Ok(())
    }

    async fn get(&self, id: &OrderId) -> Result<Option<Order>, RepositoryError> {
        let row = sqlx::query_as::<_, DocumentRow>(
            r"
            SELECT id, document
            FROM orders
            WHERE id = $1
            ",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|(id, document)| decode("order", &id, document))
            .transpose()
    }
}

#[async_trait]
impl StoreHealth for PgDocumentStore {
    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Decode one stored document into its record type.
fn decode<T: DeserializeOwned>(
    kind: &str,
    id: &str,
    document: serde_json::Value,
) -> Result<T, RepositoryError> {
    serde_json::from_value(document)
        .map_err(|e| RepositoryError::DataCorruption(format!("invalid {kind} document {id}: {e}")))
}

fn decode_all<T: DeserializeOwned>(
    kind: &str,
    rows: Vec<DocumentRow>,
) -> Result<Vec<T>, RepositoryError> {
    rows.into_iter()
        .map(|(id, document)| decode(kind, &id, document))
        .collect()
}

fn conflict_or_database(e: sqlx::Error, kind: &str, id: &str) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = e
        && db_err.is_unique_violation()
    {
        return RepositoryError::Conflict(format!("{kind} {id} already exists"));
    }
    RepositoryError::Database(e)
}
