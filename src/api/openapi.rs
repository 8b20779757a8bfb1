//! OpenAPI document for the REST surface.

use utoipa::OpenApi;

use crate::api::dto::{BookmarkResponse, CreateBookmarkRequest, UpdateBookmarkRequest};
use crate::api::handlers::{bookmark, system};
use crate::error::{ErrorBody, ErrorResponse};

/// Aggregated OpenAPI specification for every endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "bookmarks-api",
        description = "Save, rate, and manage web bookmarks."
    ),
    paths(
        bookmark::list_bookmarks,
        bookmark::create_bookmark,
        bookmark::get_bookmark,
        bookmark::update_bookmark,
        bookmark::delete_bookmark,
        system::health_handler,
    ),
    components(schemas(
        BookmarkResponse,
        CreateBookmarkRequest,
        UpdateBookmarkRequest,
        ErrorResponse,
        ErrorBody,
        system::HealthResponse,
    )),
    tags(
        (name = "Bookmarks", description = "Bookmark CRUD"),
        (name = "System", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// Swagger UI at `/swagger-ui`, serving the document at
/// `/api-docs/openapi.json`.
#[cfg(feature = "swagger-ui")]
#[must_use]
pub fn swagger_ui() -> utoipa_swagger_ui::SwaggerUi {
    utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
}
