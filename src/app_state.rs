//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::BookmarkService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
///
/// This is the only thing shared between requests: the service and, through
/// it, the storage handle.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Bookmark service for all business logic.
    pub bookmark_service: Arc<BookmarkService>,
}
