//! Embedded schema migrations.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use jobtrack_core::error::{AppError, ErrorKind};
use jobtrack_core::result::AppResult;

/// All migrations compiled into the binary, so a deployed server never
/// depends on the `migrations/` directory being present on disk.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Applies any pending migrations. Already-applied versions are
/// skipped, so this is safe to run on every startup.
pub async fn run_migrations(pool: &PgPool) -> AppResult<()> {
    let total = MIGRATOR.iter().count();
    info!(total, "Applying schema migrations");

    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Migration failed: {e}"),
            e,
        )
    })?;

    info!("Schema is up to date");
    Ok(())
}
