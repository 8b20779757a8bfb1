//! Process-local bookmark store.
//!
//! [`MemoryBookmarkStore`] keeps rows in a `BTreeMap` behind a single
//! [`tokio::sync::RwLock`]. Reads run concurrently; writes are serialized.
//! Ids start at 1 and are never reused, matching a `BIGSERIAL` column.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::BookmarkStore;
use crate::domain::{Bookmark, BookmarkId, BookmarkPatch, NewBookmark};
use crate::error::ApiError;

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<BookmarkId, Bookmark>,
    last_id: i64,
}

/// In-memory implementation of [`BookmarkStore`].
#[derive(Debug, Default)]
pub struct MemoryBookmarkStore {
    table: RwLock<Table>,
}

impl MemoryBookmarkStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored bookmarks.
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    /// Returns `true` if the store holds no bookmarks.
    pub async fn is_empty(&self) -> bool {
        self.table.read().await.rows.is_empty()
    }
}

#[async_trait]
impl BookmarkStore for MemoryBookmarkStore {
    async fn list_all(&self) -> Result<Vec<Bookmark>, ApiError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn insert(&self, bookmark: NewBookmark) -> Result<Bookmark, ApiError> {
        let mut table = self.table.write().await;
        let next = table
            .last_id
            .checked_add(1)
            .ok_or_else(|| ApiError::Persistence("bookmark id sequence exhausted".to_string()))?;
        table.last_id = next;

        let id = BookmarkId::new(next);
        let row = bookmark.into_bookmark(id);
        table.rows.insert(id, row.clone());
        Ok(row)
    }

    async fn get_by_id(&self, id: BookmarkId) -> Result<Option<Bookmark>, ApiError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn update(&self, id: BookmarkId, patch: BookmarkPatch) -> Result<u64, ApiError> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&id) {
            Some(row) if !patch.is_empty() => {
                patch.apply_to(row);
                Ok(1)
            }
            _ => Ok(0),
        }
    }

    async fn delete(&self, id: BookmarkId) -> Result<u64, ApiError> {
        let mut table = self.table.write().await;
        Ok(u64::from(table.rows.remove(&id).is_some()))
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
