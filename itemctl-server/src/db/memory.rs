//! In-memory item store
//!
//! Same contract as [`super::PgItemStore`]: ids start at 1, are handed out
//! in increasing order and never reused, and listing is by id ascending.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::{DbError, ItemStore};
use crate::models::{Item, ItemFilter, NewItem, Page};

#[derive(Debug)]
struct Inner {
    next_id: i32,
    items: BTreeMap<i32, Item>,
}

/// Item store kept in process memory
#[derive(Debug)]
pub struct MemoryItemStore {
    inner: RwLock<Inner>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: 1,
                items: BTreeMap::new(),
            }),
        }
    }

    /// Number of stored items.
    pub async fn len(&self) -> usize {
        self.inner.read().await.items.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for MemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn create(&self, item: NewItem) -> Result<Item, DbError> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let created = item.into_item(id);
        inner.items.insert(id, created.clone());
        Ok(created)
    }

    async fn list(&self, filter: &ItemFilter, page: Page) -> Result<Vec<Item>, DbError> {
        let inner = self.inner.read().await;
        let items = inner
            .items
            .values()
            .filter(|item| filter.matches(item))
            .skip(page.skip as usize)
            .take(page.limit as usize)
            .cloned()
            .collect();
        Ok(items)
    }

    async fn get(&self, id: i32) -> Result<Item, DbError> {
        let inner = self.inner.read().await;
        inner.items.get(&id).cloned().ok_or(DbError::NotFound { id })
    }

    async fn update(&self, id: i32, item: NewItem) -> Result<Item, DbError> {
        let mut inner = self.inner.write().await;
        let slot = inner.items.get_mut(&id).ok_or(DbError::NotFound { id })?;
        *slot = item.into_item(id);
        Ok(slot.clone())
    }

    async fn delete(&self, id: i32) -> Result<(), DbError> {
        let mut inner = self.inner.write().await;
        inner
            .items
            .remove(&id)
            .map(|_| ())
            .ok_or(DbError::NotFound { id })
    }
}
