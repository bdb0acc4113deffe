//! Table bootstrap for `items`
//!
//! Creates the table when missing. There is no migration mechanism: an
//! existing table is left exactly as it is.

use sqlx::PgPool;

const CREATE_ITEMS: &str = r#"
    CREATE TABLE IF NOT EXISTS items (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        price DOUBLE PRECISION NOT NULL,
        in_stock BOOLEAN NOT NULL DEFAULT TRUE
    )
"#;

/// Create the `items` table if it doesn't exist.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_ITEMS).execute(pool).await?;
    tracing::info!("items table ready");
    Ok(())
}
