//! PostgreSQL implementation of the persistence gateway.
//!
//! Expects the table below to exist; this service does not migrate it.
//!
//! ```sql
//! CREATE TABLE bookmarks (
//!     id          BIGSERIAL PRIMARY KEY,
//!     title       TEXT    NOT NULL,
//!     url         TEXT    NOT NULL,
//!     description TEXT,
//!     rating      INTEGER NOT NULL
//! );
//! ```

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::BookmarkStore;
use crate::domain::{Bookmark, BookmarkId, BookmarkPatch, NewBookmark};
use crate::error::ApiError;

/// PostgreSQL-backed bookmark store using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresBookmarkStore {
    pool: PgPool,
}

impl PostgresBookmarkStore {
    /// Creates a new store over the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookmarkStore for PostgresBookmarkStore {
    async fn list_all(&self) -> Result<Vec<Bookmark>, ApiError> {
        let rows = sqlx::query_as::<_, Bookmark>(
            "SELECT id, title, url, description, rating FROM bookmarks ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn insert(&self, bookmark: NewBookmark) -> Result<Bookmark, ApiError> {
        let row = sqlx::query_as::<_, Bookmark>(
            "INSERT INTO bookmarks (title, url, description, rating) VALUES ($1, $2, $3, $4) \
             RETURNING id, title, url, description, rating",
        )
        .bind(&bookmark.title)
        .bind(&bookmark.url)
        .bind(&bookmark.description)
        .bind(bookmark.rating)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn get_by_id(&self, id: BookmarkId) -> Result<Option<Bookmark>, ApiError> {
        let row = sqlx::query_as::<_, Bookmark>(
            "SELECT id, title, url, description, rating FROM bookmarks WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn update(&self, id: BookmarkId, patch: BookmarkPatch) -> Result<u64, ApiError> {
        if patch.is_empty() {
            return Ok(0);
        }

        let mut query = update_query(id, patch);
        let result = query.build().execute(&self.pool).await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: BookmarkId) -> Result<u64, ApiError> {
        let result = sqlx::query("DELETE FROM bookmarks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}

/// Builds `UPDATE bookmarks SET ... WHERE id = $n` naming only the columns
/// present in `patch`. The caller guarantees the patch is non-empty.
fn update_query(id: BookmarkId, patch: BookmarkPatch) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new("UPDATE bookmarks SET ");
    {
        let mut columns = query.separated(", ");
        if let Some(title) = patch.title {
            columns.push("title = ").push_bind_unseparated(title);
        }
        if let Some(url) = patch.url {
            columns.push("url = ").push_bind_unseparated(url);
        }
        if let Some(description) = patch.description {
            columns
                .push("description = ")
                .push_bind_unseparated(description);
        }
        if let Some(rating) = patch.rating {
            columns.push("rating = ").push_bind_unseparated(rating);
        }
    }
    query.push(" WHERE id = ").push_bind(id);
    query
}
