//! Bookmark service: resolves ids, logs lifecycle events, and delegates
//! storage to the injected [`BookmarkStore`].

use std::sync::Arc;

use crate::domain::{Bookmark, BookmarkId, BookmarkPatch, NewBookmark};
use crate::error::ApiError;
use crate::persistence::BookmarkStore;

/// Orchestration layer for all bookmark operations.
///
/// Holds no per-request state. Inputs arrive already validated, so every
/// method is a single awaited call into the store plus logging.
#[derive(Debug, Clone)]
pub struct BookmarkService {
    store: Arc<dyn BookmarkStore>,
}

impl BookmarkService {
    /// Creates a new `BookmarkService` over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn BookmarkStore>) -> Self {
        Self { store }
    }

    /// Returns a reference to the inner store.
    #[must_use]
    pub fn store(&self) -> &Arc<dyn BookmarkStore> {
        &self.store
    }

    /// Returns every stored bookmark.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn list(&self) -> Result<Vec<Bookmark>, ApiError> {
        self.store.list_all().await
    }

    /// Stores a validated bookmark and returns it with its id.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn create(&self, bookmark: NewBookmark) -> Result<Bookmark, ApiError> {
        let created = self.store.insert(bookmark).await?;
        tracing::info!(id = %created.id, "bookmark created");
        Ok(created)
    }

    /// Resolves a raw path segment to a stored bookmark.
    ///
    /// This is the shared precondition of retrieve, update, and delete.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if `raw_id` is not an integer or no
    /// bookmark has that id; propagates store failures.
    pub async fn fetch(&self, raw_id: &str) -> Result<Bookmark, ApiError> {
        let Ok(id) = raw_id.parse::<BookmarkId>() else {
            tracing::warn!(id = raw_id, "bookmark not found (malformed id)");
            return Err(ApiError::NotFound(raw_id.to_string()));
        };

        match self.store.get_by_id(id).await? {
            Some(bookmark) => Ok(bookmark),
            None => {
                tracing::warn!(%id, "bookmark not found");
                Err(ApiError::NotFound(raw_id.to_string()))
            }
        }
    }

    /// Applies a validated, non-empty patch to an existing bookmark.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn update(&self, id: BookmarkId, patch: BookmarkPatch) -> Result<u64, ApiError> {
        let affected = self.store.update(id, patch).await?;
        tracing::info!(%id, affected, "bookmark updated");
        Ok(affected)
    }

    /// Deletes a bookmark. The affected-row count is logged, not checked.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn delete(&self, id: BookmarkId) -> Result<u64, ApiError> {
        let affected = self.store.delete(id).await?;
        tracing::info!(%id, affected, "bookmark deleted");
        Ok(affected)
    }
}
