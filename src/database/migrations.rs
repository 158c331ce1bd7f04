//! Schema migrations embedded from the `migrations/` directory at compile
//! time. Files follow `YYYYMMDDHHMMSS_description.sql`.

use sqlx::PgPool;
use tracing::info;

use crate::error::Result;

/// Apply every pending migration. Already-applied versions are skipped.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    let migrator = sqlx::migrate!("./migrations");
    info!(
        available = migrator.iter().count(),
        "Applying database migrations"
    );
    migrator.run(pool).await?;
    info!("Database migrations complete");
    Ok(())
}
