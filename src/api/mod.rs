//! REST API layer: route handlers, DTOs, validation, and router
//! composition.
//!
//! The bookmark resource is mounted at `/bookmarks`; system endpoints at
//! the root.

pub mod dto;
pub mod handlers;
pub mod openapi;
pub mod validation;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .merge(handlers::routes())
        .merge(handlers::system::routes())
}

/// Builds the servable application: every route, the Swagger UI when the
/// `swagger-ui` feature is enabled, request tracing, and permissive CORS.
pub fn build_app(state: AppState) -> Router {
    let router = build_router();

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(openapi::swagger_ui());

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
