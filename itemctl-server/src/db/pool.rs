//! PostgreSQL connection pool
//!
//! The pool is built once at startup and handed to [`super::PgItemStore`];
//! nothing keeps it in a global.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Connect a pool to `database_url`.
///
/// # Errors
///
/// Returns an error if the first connection can't be established.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect(database_url)
        .await?;

    tracing::debug!(max_connections, "database pool connected");
    Ok(pool)
}
