//! Service layer: business logic orchestration.
//!
//! [`BookmarkService`] resolves ids, logs lifecycle events, and delegates
//! storage to a [`super::persistence::BookmarkStore`].

pub mod bookmark_service;

pub use bookmark_service::BookmarkService;
