//! Persistence gateway: raw storage of bookmark rows.
//!
//! [`BookmarkStore`] is the seam between the service layer and storage.
//! Implementations neither validate nor sanitize; they store what they are
//! given and return what they hold. [`PostgresBookmarkStore`] uses
//! `sqlx::PgPool`; [`MemoryBookmarkStore`] keeps rows in process and backs
//! the service when persistence is disabled, and in tests.

pub mod memory;
pub mod postgres;

use std::fmt::Debug;

use async_trait::async_trait;

pub use memory::MemoryBookmarkStore;
pub use postgres::PostgresBookmarkStore;

use crate::domain::{Bookmark, BookmarkId, BookmarkPatch, NewBookmark};
use crate::error::ApiError;

/// Data-access interface for the `bookmarks` table.
#[async_trait]
pub trait BookmarkStore: Debug + Send + Sync {
    /// Returns every stored bookmark in ascending id order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on storage failure.
    async fn list_all(&self) -> Result<Vec<Bookmark>, ApiError>;

    /// Stores a new bookmark and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on storage failure.
    async fn insert(&self, bookmark: NewBookmark) -> Result<Bookmark, ApiError>;

    /// Looks up a bookmark by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on storage failure. A missing row
    /// is `Ok(None)`, not an error.
    async fn get_by_id(&self, id: BookmarkId) -> Result<Option<Bookmark>, ApiError>;

    /// Overwrites the provided fields of a bookmark and returns the number
    /// of affected rows.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on storage failure.
    async fn update(&self, id: BookmarkId, patch: BookmarkPatch) -> Result<u64, ApiError>;

    /// Deletes a bookmark and returns the number of affected rows.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on storage failure.
    async fn delete(&self, id: BookmarkId) -> Result<u64, ApiError>;

    /// Short name of the storage backend, reported by `/health`.
    fn backend(&self) -> &'static str;
}
