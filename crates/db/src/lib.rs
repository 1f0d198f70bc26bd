//! Persistence layer for the Camerapedia catalog.
//!
//! Owns pool construction, migrations, row models and the repositories the
//! API handlers call.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// PostgreSQL SQLSTATE for `unique_violation`.
pub const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL SQLSTATE for `foreign_key_violation`.
pub const FOREIGN_KEY_VIOLATION: &str = "23503";

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

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}

/// Whether `err` is a unique constraint violation on a `uq_`-prefixed constraint.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    violated_constraint(err, UNIQUE_VIOLATION).is_some_and(|c| c.starts_with("uq_"))
}

/// Whether `err` is a foreign key violation on an `fk_`-prefixed constraint.
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    violated_constraint(err, FOREIGN_KEY_VIOLATION).is_some_and(|c| c.starts_with("fk_"))
}

/// Name of the constraint violated by `err`, if it carries the given SQLSTATE.
pub fn violated_constraint<'a>(err: &'a sqlx::Error, sqlstate: &str) -> Option<&'a str> {
    match err {
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(sqlstate) => {
            db_err.constraint()
        }
        _ => None,
    }
}
