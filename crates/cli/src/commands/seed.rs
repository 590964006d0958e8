//! Seed the product catalog.
//!
//! Runs the same emptiness-gated seeding pass as server startup, so it is
//! safe to run against a populated catalog.

use mangal_chai_api::{
    db::PgDocumentStore,
    seed::{SeedOutcome, seed_catalog},
};

use super::{CommandError, connect};

/// Seed the catalog if it is empty.
///
/// # Errors
///
/// Returns `CommandError` if the database is unreachable or the insert fails.
pub async fn run() -> Result<(), CommandError> {
    let store = PgDocumentStore::new(connect().await?);

    match seed_catalog(&store).await? {
        SeedOutcome::Seeded(count) => tracing::info!(count, "Catalog seeded"),
        SeedOutcome::AlreadyPopulated(count) => {
            tracing::info!(count, "Catalog already has products, nothing to do");
        }
    }
    Ok(())
}
