//! SQLite-backed sheet storage.

mod schema;
mod transaction;

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::infrastructure::ports::{RepoError, SheetStore, SheetTransaction};

pub use schema::{ensure_schema, seed_catalogue};
pub use transaction::SqliteSheetTransaction;

/// Sheet store over a SQLite connection pool.
#[derive(Clone)]
pub struct SqliteSheetStore {
    pool: SqlitePool,
}

impl SqliteSheetStore {
    /// Connect to `database_url` and make sure every table exists.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, RepoError> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| RepoError::database("connect", e))?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(|e| RepoError::database("connect", e))?;

        Self::from_pool(pool).await
    }

    /// Private in-memory database on a single connection.
    ///
    /// The connection never idles out, otherwise the database would vanish.
    pub async fn in_memory() -> Result<Self, RepoError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| RepoError::database("connect", e))?
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| RepoError::database("connect", e))?;

        Self::from_pool(pool).await
    }

    pub async fn from_pool(pool: SqlitePool) -> Result<Self, RepoError> {
        ensure_schema(&pool).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl SheetStore for SqliteSheetStore {
    async fn begin(&self) -> Result<Box<dyn SheetTransaction>, RepoError> {
        let tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepoError::database("begin", e))?;
        Ok(Box::new(SqliteSheetTransaction::new(tx)))
    }
}
