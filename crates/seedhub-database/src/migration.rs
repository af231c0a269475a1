//! Schema for the PostgreSQL backend, embedded from `migrations/`.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use seedhub_core::error::{AppError, ErrorKind};

static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Applies every embedded migration the database has not seen yet.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    let known = MIGRATOR.iter().count();
    info!(known, "Applying schema migrations");

    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(ErrorKind::Database, format!("Schema migration failed: {e}"), e)
    })?;

    info!("Schema up to date");
    Ok(())
}
