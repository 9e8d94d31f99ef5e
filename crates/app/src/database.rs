//! Database connection management

use sqlx::{PgPool, query};

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Shared handle over the connection pool.
#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPool::connect(database_url).await
}

/// Create the disqualifications table and its delta index when absent.
///
/// Idempotent; safe to run at every startup.
///
/// # Errors
///
/// Returns an error when a schema statement fails to execute.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA_SQL.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        query(statement).execute(pool).await?;
    }

    Ok(())
}
