//! Store handle factory: one process-wide pool, one [`Session`] per request.
//!
//! `sqlite:` URLs open a file-based (or in-memory) store, `postgres://` URLs a
//! networked one. Both expose the same session operations.

mod postgres;
mod session;
mod sqlite;

pub use postgres::ensure_database_exists;
pub use session::Session;

use crate::config::{Settings, StoreKind};
use crate::error::{AppError, ConfigError};
use sqlx::{PgPool, SqlitePool};

#[derive(Clone, Debug)]
pub enum Store {
    Postgres(PgPool),
    Sqlite(SqlitePool),
}

impl Store {
    /// Open the pool selected by `settings.database_url`.
    /// For PostgreSQL the target database is created first when missing.
    pub async fn connect(settings: &Settings) -> Result<Self, AppError> {
        if settings.max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DB_MAX_CONNECTIONS",
                value: "0".into(),
            }
            .into());
        }
        let store = match settings.store_kind()? {
            StoreKind::Postgres => {
                ensure_database_exists(&settings.database_url).await?;
                Store::Postgres(postgres::connect(settings).await?)
            }
            StoreKind::Sqlite => Store::Sqlite(sqlite::connect(settings).await?),
        };
        tracing::info!(kind = ?store.kind(), "store connected");
        Ok(store)
    }

    pub fn kind(&self) -> StoreKind {
        match self {
            Store::Postgres(_) => StoreKind::Postgres,
            Store::Sqlite(_) => StoreKind::Sqlite,
        }
    }

    /// Create `question` and `choices` with their indexes if they do not exist yet.
    pub async fn ensure_tables(&self) -> Result<(), AppError> {
        match self {
            Store::Postgres(pool) => postgres::ensure_tables(pool).await?,
            Store::Sqlite(pool) => sqlite::ensure_tables(pool).await?,
        }
        Ok(())
    }

    /// Check out one connection. It goes back to the pool when the session is dropped.
    pub async fn session(&self) -> Result<Session, sqlx::Error> {
        Ok(match self {
            Store::Postgres(pool) => Session::Postgres(pool.acquire().await?),
            Store::Sqlite(pool) => Session::Sqlite(pool.acquire().await?),
        })
    }

    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        match self {
            Store::Postgres(pool) => {
                sqlx::query("SELECT 1").execute(pool).await?;
            }
            Store::Sqlite(pool) => {
                sqlx::query("SELECT 1").execute(pool).await?;
            }
        }
        Ok(())
    }

    pub async fn close(&self) {
        match self {
            Store::Postgres(pool) => pool.close().await,
            Store::Sqlite(pool) => pool.close().await,
        }
    }
}
