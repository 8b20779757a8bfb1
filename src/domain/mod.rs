//! Domain layer: bookmark identity, stored records, validated inputs,
//! and the output escaper.

pub mod bookmark;
pub mod bookmark_id;
pub mod escape;

pub use bookmark::{Bookmark, BookmarkPatch, NewBookmark};
pub use bookmark_id::BookmarkId;
pub use escape::escape_html;
