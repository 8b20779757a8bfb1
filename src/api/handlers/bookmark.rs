//! Bookmark CRUD handlers: list, create, get, update, delete.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{BookmarkResponse, CreateBookmarkRequest, UpdateBookmarkRequest};
use crate::api::validation;
use crate::app_state::AppState;
use crate::error::{ApiError, ErrorResponse};

/// `GET /bookmarks` — List all bookmarks.
///
/// # Errors
///
/// Returns [`ApiError`] on persistence failures.
#[utoipa::path(
    get,
    path = "/bookmarks",
    tag = "Bookmarks",
    summary = "List bookmarks",
    description = "Returns every stored bookmark with title and description HTML-escaped.",
    responses(
        (status = 200, description = "All bookmarks", body = Vec<BookmarkResponse>),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn list_bookmarks(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let bookmarks = state.bookmark_service.list().await?;
    let data: Vec<BookmarkResponse> = bookmarks.into_iter().map(BookmarkResponse::from).collect();
    Ok(Json(data))
}

/// `POST /bookmarks` — Create a bookmark.
///
/// # Errors
///
/// Returns [`ApiError`] on a missing field, invalid rating or URL, or a
/// malformed body.
#[utoipa::path(
    post,
    path = "/bookmarks",
    tag = "Bookmarks",
    summary = "Create a bookmark",
    description = "Validates and stores a bookmark. `title`, `url`, and `rating` are required; `rating` must be an integer from 0 to 5 and `url` an absolute http(s) URL.",
    request_body = CreateBookmarkRequest,
    responses(
        (status = 201, description = "Bookmark created", body = BookmarkResponse,
            headers(("Location" = String, description = "Path of the new bookmark"))),
        (status = 400, description = "Invalid request", body = ErrorResponse),
    )
)]
pub async fn create_bookmark(
    State(state): State<AppState>,
    payload: Result<Json<CreateBookmarkRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload?;
    let new_bookmark = validation::new_bookmark(req)?;

    let bookmark = state.bookmark_service.create(new_bookmark).await?;
    let location = bookmark.id.location();

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(BookmarkResponse::from(bookmark)),
    ))
}

/// `GET /bookmarks/{id}` — Get a single bookmark.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] if the bookmark does not exist.
#[utoipa::path(
    get,
    path = "/bookmarks/{id}",
    tag = "Bookmarks",
    summary = "Get a bookmark",
    description = "Returns one bookmark with title and description HTML-escaped.",
    params(
        ("id" = i64, Path, description = "Bookmark id"),
    ),
    responses(
        (status = 200, description = "Bookmark", body = BookmarkResponse),
        (status = 404, description = "Bookmark not found", body = ErrorResponse),
    )
)]
pub async fn get_bookmark(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let bookmark = state.bookmark_service.fetch(&id).await?;
    Ok(Json(BookmarkResponse::from(bookmark)))
}

/// `PATCH /bookmarks/{id}` — Update any subset of a bookmark's fields.
///
/// The id is resolved before the body is inspected, so an unknown id is
/// reported as 404 whatever the body holds.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] for an unknown id, then
/// [`ApiError::EmptyUpdate`] or a field validation error.
#[utoipa::path(
    patch,
    path = "/bookmarks/{id}",
    tag = "Bookmarks",
    summary = "Update a bookmark",
    description = "Overwrites the provided fields. At least one of `title`, `url`, `description`, or `rating` must be given.",
    params(
        ("id" = i64, Path, description = "Bookmark id"),
    ),
    request_body = UpdateBookmarkRequest,
    responses(
        (status = 204, description = "Bookmark updated"),
        (status = 400, description = "No fields or invalid values", body = ErrorResponse),
        (status = 404, description = "Bookmark not found", body = ErrorResponse),
    )
)]
pub async fn update_bookmark(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateBookmarkRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let bookmark = state.bookmark_service.fetch(&id).await?;

    let Json(req) = payload?;
    let patch = validation::bookmark_patch(req)?;

    state.bookmark_service.update(bookmark.id, patch).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /bookmarks/{id}` — Remove a bookmark.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] if the bookmark does not exist.
#[utoipa::path(
    delete,
    path = "/bookmarks/{id}",
    tag = "Bookmarks",
    summary = "Delete a bookmark",
    description = "Removes a bookmark permanently.",
    params(
        ("id" = i64, Path, description = "Bookmark id"),
    ),
    responses(
        (status = 204, description = "Bookmark deleted"),
        (status = 404, description = "Bookmark not found", body = ErrorResponse),
    )
)]
pub async fn delete_bookmark(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let bookmark = state.bookmark_service.fetch(&id).await?;
    state.bookmark_service.delete(bookmark.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Bookmark resource routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/bookmarks", get(list_bookmarks).post(create_bookmark))
        .route(
            "/bookmarks/{id}",
            get(get_bookmark)
                .patch(update_bookmark)
                .delete(delete_bookmark),
        )
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::Request;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::persistence::MemoryBookmarkStore;
    use crate::service::BookmarkService;

    fn make_app() -> (Router, Arc<MemoryBookmarkStore>) {
        let store = Arc::new(MemoryBookmarkStore::new());
        let service = BookmarkService::new(Arc::clone(&store) as _);
        let state = AppState {
            bookmark_service: Arc::new(service),
        };
        (routes().with_state(state), store)
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Option<String>, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        };
        let Ok(request) = request else {
            panic!("invalid request");
        };
        let Ok(response) = app.clone().oneshot(request).await else {
            panic!("router failed");
        };

        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
            panic!("unreadable body");
        };
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, location, json)
    }

    fn error_message(body: &Value) -> Option<&str> {
        body.get("error")?.get("message")?.as_str()
    }

    #[tokio::test]
    async fn create_returns_location_and_body() {
        let (app, _) = make_app();
        let payload = json!({
            "title": "Example",
            "url": "https://example.com",
            "description": "a site",
            "rating": 5,
        });

        let (status, location, body) = send(&app, "POST", "/bookmarks", Some(payload)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(location.as_deref(), Some("/bookmarks/1"));
        assert_eq!(body["id"], 1);
        assert_eq!(body["url"], "https://example.com");
        assert_eq!(body["rating"], 5);
    }

    #[tokio::test]
    async fn create_with_zero_rating_succeeds() {
        let (app, _) = make_app();
        let payload = json!({"title": "Meh", "url": "http://example.org", "rating": 0});
        let (status, _, body) = send(&app, "POST", "/bookmarks", Some(payload)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["rating"], 0);
    }

    #[tokio::test]
    async fn create_missing_field_persists_nothing() {
        let (app, store) = make_app();
        for field in ["title", "url", "rating"] {
            let mut payload = json!({"title": "t", "url": "https://example.com", "rating": 3});
            if let Some(obj) = payload.as_object_mut() {
                obj.remove(field);
            }

            let (status, _, body) = send(&app, "POST", "/bookmarks", Some(payload)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            let expected = format!("'{field}' is required");
            assert_eq!(error_message(&body), Some(expected.as_str()));
        }
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn create_rejects_bad_ratings() {
        let (app, store) = make_app();
        for rating in [json!(6), json!(-1), json!(2.5)] {
            let payload = json!({"title": "t", "url": "https://example.com", "rating": rating});
            let (status, _, body) = send(&app, "POST", "/bookmarks", Some(payload)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(
                error_message(&body),
                Some("'rating' must be a number between 0 and 5")
            );
        }
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn create_rejects_bad_url() {
        let (app, _) = make_app();
        let payload = json!({"title": "t", "url": "not a url", "rating": 3});
        let (status, _, body) = send(&app, "POST", "/bookmarks", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_message(&body), Some("'url' must be a valid URL"));
    }

    #[tokio::test]
    async fn create_rejects_url_without_authority() {
        let (app, store) = make_app();
        for url in ["https:example.com", " https://example.com "] {
            let payload = json!({"title": "t", "url": url, "rating": 2});
            let (status, _, body) = send(&app, "POST", "/bookmarks", Some(payload)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{url} accepted");
            assert_eq!(error_message(&body), Some("'url' must be a valid URL"));
        }
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn create_rejects_malformed_json() {
        let (app, _) = make_app();
        let payload = json!({"title": 42, "url": "https://example.com", "rating": 3});
        let (status, _, body) = send(&app, "POST", "/bookmarks", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], 1005);
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let (app, _) = make_app();
        for uri in ["/bookmarks/99999", "/bookmarks/abc"] {
            let (status, _, body) = send(&app, "GET", uri, None).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(error_message(&body), Some("Bookmark Not Found"));
        }
    }

    #[tokio::test]
    async fn list_and_get_escape_markup() {
        let (app, _) = make_app();
        let payload = json!({
            "title": "<script>alert(1)</script>",
            "url": "https://example.com",
            "description": "<script>steal()</script>",
            "rating": 1,
        });
        let _ = send(&app, "POST", "/bookmarks", Some(payload)).await;

        let (status, _, list) = send(&app, "GET", "/bookmarks", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list[0]["title"], "&lt;script&gt;alert(1)&lt;/script&gt;");
        assert_eq!(list[0]["description"], "&lt;script&gt;steal()&lt;/script&gt;");

        let (status, _, one) = send(&app, "GET", "/bookmarks/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(one["title"], "&lt;script&gt;alert(1)&lt;/script&gt;");
        assert_eq!(one["url"], "https://example.com");
    }

    #[tokio::test]
    async fn patch_empty_body_is_bad_request() {
        let (app, _) = make_app();
        let payload = json!({"title": "t", "url": "https://example.com", "rating": 3});
        let _ = send(&app, "POST", "/bookmarks", Some(payload)).await;

        let (status, _, body) = send(&app, "PATCH", "/bookmarks/1", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], 1004);
    }

    #[tokio::test]
    async fn patch_title_changes_only_title() {
        let (app, _) = make_app();
        let payload = json!({
            "title": "Old",
            "url": "https://example.com",
            "description": "kept",
            "rating": 2,
        });
        let _ = send(&app, "POST", "/bookmarks", Some(payload)).await;

        let (status, _, _) =
            send(&app, "PATCH", "/bookmarks/1", Some(json!({"title": "New"}))).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, _, body) = send(&app, "GET", "/bookmarks/1", None).await;
        assert_eq!(
            body,
            json!({
                "id": 1,
                "title": "New",
                "url": "https://example.com",
                "description": "kept",
                "rating": 2,
            })
        );
    }

    #[tokio::test]
    async fn patch_can_clear_description() {
        let (app, _) = make_app();
        let payload = json!({
            "title": "Old",
            "url": "https://example.com",
            "description": "old",
            "rating": 2,
        });
        let _ = send(&app, "POST", "/bookmarks", Some(payload)).await;

        let update = json!({"title": "n", "description": ""});
        let (status, _, _) = send(&app, "PATCH", "/bookmarks/1", Some(update)).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, _, body) = send(&app, "GET", "/bookmarks/1", None).await;
        assert_eq!(body["title"], "n");
        assert_eq!(body["description"], "");
    }

    #[tokio::test]
    async fn patch_unknown_id_is_not_found_before_body_checks() {
        let (app, _) = make_app();
        let (status, _, body) = send(&app, "PATCH", "/bookmarks/99999", Some(json!({}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(error_message(&body), Some("Bookmark Not Found"));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let (app, store) = make_app();
        let payload = json!({"title": "t", "url": "https://example.com", "rating": 3});
        let _ = send(&app, "POST", "/bookmarks", Some(payload)).await;

        let (status, _, _) = send(&app, "DELETE", "/bookmarks/1", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(store.is_empty().await);

        let (status, _, _) = send(&app, "GET", "/bookmarks/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _, _) = send(&app, "DELETE", "/bookmarks/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
