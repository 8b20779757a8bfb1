//! Data Transfer Objects for REST request/response serialization.

pub mod bookmark_dto;

pub use bookmark_dto::*;
