//! Type-safe bookmark identifier.
//!
//! [`BookmarkId`] is a newtype wrapper around the `i64` primary key
//! assigned by storage, so bookmark ids cannot be confused with other
//! integers (ratings, row counts).

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Unique identifier for a stored bookmark.
///
/// Assigned by the persistence gateway on insert and immutable thereafter.
/// Used as the key in [`crate::persistence::MemoryBookmarkStore`] and in
/// the `Location` header of a created bookmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct BookmarkId(i64);

impl BookmarkId {
    /// Creates a `BookmarkId` from a raw key.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw key.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Path of this bookmark's resource, used as the `Location` of a
    /// newly created bookmark.
    #[must_use]
    pub fn location(self) -> String {
        format!("/bookmarks/{}", self.0)
    }
}

impl fmt::Display for BookmarkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookmarkId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}
