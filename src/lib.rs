//! # bookmarks-api
//!
//! REST API for saving, rating, and managing web bookmarks.
//!
//! This crate exposes a single `bookmarks` resource with list, create,
//! fetch, partial update, and delete operations. Request payloads are
//! validated before anything is stored, and free-text fields are
//! HTML-escaped on the way out. Storage is delegated to a
//! [`persistence::BookmarkStore`], either PostgreSQL or in memory.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers + Validation (api/)
//!     │
//!     ├── BookmarkService (service/)
//!     │
//!     └── BookmarkStore (persistence/)
//!           ├── PostgreSQL (sqlx)
//!           └── In-memory
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
