//! Bookmark records as stored, and the validated inputs that create or
//! modify them.

use super::BookmarkId;

/// A persisted bookmark row.
///
/// Holds raw stored text; run it through
/// [`crate::api::dto::BookmarkResponse`] before returning it to a client.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Bookmark {
    /// Storage-assigned identifier.
    pub id: BookmarkId,
    /// Non-empty title.
    pub title: String,
    /// Absolute http(s) URL, exactly as supplied.
    pub url: String,
    /// Optional free text.
    pub description: Option<String>,
    /// Rating in `[0, 5]`.
    pub rating: i32,
}

/// A validated bookmark awaiting insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBookmark {
    /// Non-empty title.
    pub title: String,
    /// Absolute http(s) URL.
    pub url: String,
    /// Optional free text.
    pub description: Option<String>,
    /// Rating in `[0, 5]`.
    pub rating: i32,
}

impl NewBookmark {
    /// Materializes the stored row once storage has assigned an id.
    #[must_use]
    pub fn into_bookmark(self, id: BookmarkId) -> Bookmark {
        Bookmark {
            id,
            title: self.title,
            url: self.url,
            description: self.description,
            rating: self.rating,
        }
    }
}

/// A validated partial update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkPatch {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement URL.
    pub url: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement rating.
    pub rating: Option<i32>,
}

impl BookmarkPatch {
    /// Returns `true` if no field would change.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.url.is_none()
            && self.description.is_none()
            && self.rating.is_none()
    }

    /// Applies the provided fields to `bookmark` in place.
    pub fn apply_to(&self, bookmark: &mut Bookmark) {
        if let Some(title) = &self.title {
            bookmark.title.clone_from(title);
        }
        if let Some(url) = &self.url {
            bookmark.url.clone_from(url);
        }
        if let Some(description) = &self.description {
            bookmark.description = Some(description.clone());
        }
        if let Some(rating) = self.rating {
            bookmark.rating = rating;
        }
    }
}
