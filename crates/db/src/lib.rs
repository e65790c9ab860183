use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Failure reported by a repository call.
///
/// Connection and SQL failures are not classified further; callers treat
/// every variant as a store error.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Raised by non-SQL backends (the in-memory repository).
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Create the `person` table if it does not exist yet.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS person ( \
             id SERIAL PRIMARY KEY, \
             name TEXT NOT NULL, \
             email TEXT NOT NULL \
         )",
    )
    .execute(pool)
    .await?;
    tracing::debug!("person table ensured");
    Ok(())
}
