//! CLI subcommands.

pub mod migrate;
pub mod seed;

use mangal_chai_api::{
    config::{ApiConfig, ConfigError},
    db::{self, RepositoryError},
};
use sqlx::PgPool;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Environment could not be parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Database connection error.
    #[error("Database connection error: {0}")]
    Connect(#[from] sqlx::Error),

    /// A migration failed to apply.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Reading or writing documents failed.
    #[error("Store error: {0}")]
    Store(#[from] RepositoryError),
}

/// Load configuration and connect to the document store.
async fn connect() -> Result<PgPool, CommandError> {
    let config = ApiConfig::from_env()?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&config.database_url, config.database_max_connections).await?;
    Ok(pool)
}
