//! Persistence layer: connection pool, migrations, models, repositories.
//!
//! One repository per table, each a stateless struct issuing parameterized
//! SQL against a shared [`DbPool`]. The pool is built once at startup and
//! injected everywhere; no module reads connection config on its own.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

pub mod models;
pub mod repositories;

/// Shared PostgreSQL connection pool.
pub type DbPool = PgPool;

/// Maximum connections held by the pool.
const MAX_CONNECTIONS: u32 = 10;

/// How long an acquire may wait before failing.
const ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// How long an idle connection is kept before being closed.
const IDLE_TIMEOUT_SECS: u64 = 600;

/// Create the shared connection pool.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(Duration::from_secs(ACQUIRE_TIMEOUT_SECS))
        .idle_timeout(Duration::from_secs(IDLE_TIMEOUT_SECS))
        .connect(database_url)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
