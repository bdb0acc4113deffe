//! Storage-agnostic item repository

use async_trait::async_trait;

use crate::models::{Item, ItemFilter, NewItem, Page};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("item {id} not found")]
    NotFound { id: i32 },
}

/// The five item operations, independent of the backing store.
///
/// Mutations are committed before the call returns. Lookups by id that
/// miss yield [`DbError::NotFound`].
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Insert a new item and return it with its assigned id.
    async fn create(&self, item: NewItem) -> Result<Item, DbError>;

    /// Items matching every supplied filter, ordered by id.
    async fn list(&self, filter: &ItemFilter, page: Page) -> Result<Vec<Item>, DbError>;

    async fn get(&self, id: i32) -> Result<Item, DbError>;

    /// Overwrite all mutable fields of an existing item.
    async fn update(&self, id: i32, item: NewItem) -> Result<Item, DbError>;

    async fn delete(&self, id: i32) -> Result<(), DbError>;

    /// Cheap reachability check used by the health endpoint.
    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }
}
