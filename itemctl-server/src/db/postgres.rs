//! PostgreSQL-backed item store
//!
//! Reads borrow a pooled connection; writes run in a transaction that is
//! committed explicitly. Either handle goes back to the pool on drop,
//! whichever way the call exits.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::pool::create_pool;
use super::schema::ensure_schema;
use super::store::{DbError, ItemStore};
use crate::models::{Item, ItemFilter, NewItem, Page};

const ITEM_COLUMNS: &str = "id, name, price, in_stock";

/// Item store over a shared [`PgPool`]
#[derive(Debug, Clone)]
pub struct PgItemStore {
    pool: PgPool,
}

impl PgItemStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect a pool and make sure the `items` table exists.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = create_pool(database_url, max_connections).await?;
        ensure_schema(&pool).await?;
        Ok(Self::new(pool))
    }
}

/// Escape `LIKE` metacharacters so the needle matches literally.
fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl ItemStore for PgItemStore {
    async fn create(&self, item: NewItem) -> Result<Item, DbError> {
        let mut tx = self.pool.begin().await?;

        let created: Item = sqlx::query_as(&format!(
            "INSERT INTO items (name, price, in_stock) VALUES ($1, $2, $3) RETURNING {}",
            ITEM_COLUMNS
        ))
        .bind(&item.name)
        .bind(item.price)
        .bind(item.in_stock)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::debug!(id = created.id, "item created");
        Ok(created)
    }

    async fn list(&self, filter: &ItemFilter, page: Page) -> Result<Vec<Item>, DbError> {
        let mut conn = self.pool.acquire().await?;

        let mut query = QueryBuilder::<Postgres>::new(format!(
            "SELECT {} FROM items WHERE TRUE",
            ITEM_COLUMNS
        ));
        if let Some(in_stock) = filter.in_stock {
            query.push(" AND in_stock = ").push_bind(in_stock);
        }
        if let Some(min_price) = filter.min_price {
            query.push(" AND price >= ").push_bind(min_price);
        }
        if let Some(needle) = filter.name_contains() {
            query
                .push(" AND name ILIKE ")
                .push_bind(contains_pattern(needle))
                .push(" ESCAPE '\\'");
        }
        query
            .push(" ORDER BY id LIMIT ")
            .push_bind(page.limit())
            .push(" OFFSET ")
            .push_bind(page.offset());

        let items = query.build_query_as::<Item>().fetch_all(&mut *conn).await?;
        tracing::debug!(count = items.len(), "items listed");
        Ok(items)
    }

    async fn get(&self, id: i32) -> Result<Item, DbError> {
        let mut conn = self.pool.acquire().await?;

        let item: Option<Item> =
            sqlx::query_as(&format!("SELECT {} FROM items WHERE id = $1", ITEM_COLUMNS))
                .bind(id)
                .fetch_optional(&mut *conn)
                .await?;

        item.ok_or(DbError::NotFound { id })
    }

    async fn update(&self, id: i32, item: NewItem) -> Result<Item, DbError> {
        let mut tx = self.pool.begin().await?;

        // Dropping `tx` on the miss path rolls back the no-op update.
        let updated: Item = sqlx::query_as(&format!(
            r#"
            UPDATE items
            SET name = $1, price = $2, in_stock = $3
            WHERE id = $4
            RETURNING {}
            "#,
            ITEM_COLUMNS
        ))
        .bind(&item.name)
        .bind(item.price)
        .bind(item.in_stock)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(DbError::NotFound { id })?;

        tx.commit().await?;
        tracing::debug!(id, "item updated");
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound { id });
        }

        tx.commit().await?;
        tracing::debug!(id, "item deleted");
        Ok(())
    }

    async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1 FROM items LIMIT 1")
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
