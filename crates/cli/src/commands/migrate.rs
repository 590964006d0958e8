//! Database migration command.
//!
//! Applies the migrations embedded from `crates/api/migrations/`, the same set
//! the server applies on startup when `RUN_MIGRATIONS` is true.

use mangal_chai_api::db;

use super::{CommandError, connect};

/// Apply pending migrations.
///
/// # Errors
///
/// Returns `CommandError` if the database is unreachable or a migration fails.
pub async fn run() -> Result<(), CommandError> {
    let pool = connect().await?;

    tracing::info!("Running migrations...");
    db::run_migrations(&pool).await?;

    tracing::info!("Migrations complete!");
    Ok(())
}
