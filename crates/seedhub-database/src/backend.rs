//! Store construction for the configured backend.

use std::sync::Arc;

use tracing::info;

use seedhub_core::config::{DatabaseBackend, DatabaseConfig};
use seedhub_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::{MemoryFileStore, MemoryUserStore};
use crate::migration::run_migrations;
use crate::repositories::{PgFileStore, PgUserStore};
use crate::store::{FileStore, UserStore};

/// The set of stores the services run against.
#[derive(Debug, Clone)]
pub struct Stores {
    /// File documents.
    pub files: Arc<dyn FileStore>,
    /// User accounts.
    pub users: Arc<dyn UserStore>,
    /// Connection pool, present for the PostgreSQL backend.
    pub pool: Option<DatabasePool>,
}

impl Stores {
    /// Open the backend named in `config`.
    ///
    /// For PostgreSQL this connects and, when `migrate` is set, applies
    /// pending migrations before returning.
    pub async fn open(config: &DatabaseConfig, migrate: bool) -> AppResult<Self> {
        match config.backend {
            DatabaseBackend::Postgres => {
                let pool = DatabasePool::connect(config).await?;
                if migrate {
                    run_migrations(pool.pool()).await?;
                }
                Ok(Self::postgres(pool))
            }
            DatabaseBackend::Memory => {
                info!("Using in-memory document stores");
                Ok(Self::memory())
            }
        }
    }

    /// Stores backed by an existing PostgreSQL pool.
    pub fn postgres(pool: DatabasePool) -> Self {
        Self {
            files: Arc::new(PgFileStore::new(pool.pool().clone())),
            users: Arc::new(PgUserStore::new(pool.pool().clone())),
            pool: Some(pool),
        }
    }

    /// Fresh, empty in-memory stores.
    pub fn memory() -> Self {
        Self {
            files: Arc::new(MemoryFileStore::new()),
            users: Arc::new(MemoryUserStore::new()),
            pool: None,
        }
    }

    /// Name of the backend in use, as spelled in `database.backend`.
    pub fn backend(&self) -> &'static str {
        if self.pool.is_some() { "postgres" } else { "memory" }
    }

    /// Checks the backend is reachable. Memory stores always are.
    pub async fn ping(&self) -> AppResult<()> {
        match &self.pool {
            Some(pool) => pool.ping().await,
            None => Ok(()),
        }
    }
}
