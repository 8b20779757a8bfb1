//! Bookmark DTOs for create, update, and read operations.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Bookmark, BookmarkId, escape_html};

/// Request body for `POST /bookmarks`.
///
/// Every field is optional at the decoding stage so that a missing field
/// surfaces as a named validation error rather than a decode failure.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateBookmarkRequest {
    /// Bookmark title. Required, non-empty.
    #[serde(default)]
    pub title: Option<String>,
    /// Absolute http(s) URL. Required.
    #[serde(default)]
    pub url: Option<String>,
    /// Optional free text.
    #[serde(default)]
    pub description: Option<String>,
    /// Integer rating in `[0, 5]`. Required. Kept as raw JSON so
    /// non-integer values can be reported as an invalid rating.
    #[serde(default)]
    #[schema(value_type = Option<i32>, minimum = 0, maximum = 5)]
    pub rating: Option<serde_json::Value>,
}

/// Request body for `PATCH /bookmarks/{id}`. Any non-empty subset.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateBookmarkRequest {
    /// Replacement title.
    #[serde(default)]
    pub title: Option<String>,
    /// Replacement URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Replacement description.
    #[serde(default)]
    pub description: Option<String>,
    /// Replacement rating in `[0, 5]`.
    #[serde(default)]
    #[schema(value_type = Option<i32>, minimum = 0, maximum = 5)]
    pub rating: Option<serde_json::Value>,
}

/// A bookmark as returned to clients.
///
/// `title` and `description` are HTML-escaped; `id`, `url`, and `rating`
/// pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BookmarkResponse {
    /// Bookmark identifier.
    #[schema(value_type = i64)]
    pub id: BookmarkId,
    /// Escaped title.
    pub title: String,
    /// URL as stored.
    pub url: String,
    /// Escaped description, `null` when absent.
    pub description: Option<String>,
    /// Rating in `[0, 5]`.
    pub rating: i32,
}

impl From<Bookmark> for BookmarkResponse {
    fn from(bookmark: Bookmark) -> Self {
        Self {
            id: bookmark.id,
            title: escape_html(&bookmark.title),
            url: bookmark.url,
            description: bookmark.description.as_deref().map(escape_html),
            rating: bookmark.rating,
        }
    }
}
