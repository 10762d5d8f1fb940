//! PostgreSQL persistence for the veranda ledger.
//!
//! Models and repositories follow one shape per entity (row struct + DTOs,
//! zero-sized repo with async fns); the `services` module holds the
//! transactional engine that enforces the presence and no-overlap
//! invariants on top of them.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
pub mod services;
pub mod tx;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply embedded migrations from `db/migrations/`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
