//! Request validation: turns decoded DTOs into domain inputs.
//!
//! All checks run before any storage call, so a rejected request never
//! leaves a partial write behind.

use url::Url;

use crate::api::dto::{CreateBookmarkRequest, UpdateBookmarkRequest};
use crate::domain::{BookmarkPatch, NewBookmark};
use crate::error::ApiError;

const MIN_RATING: f64 = 0.0;
const MAX_RATING: f64 = 5.0;

/// Validates a create request.
///
/// Presence is checked in the order `title`, `url`, `rating`; then the
/// rating range; then the URL format.
///
/// # Errors
///
/// Returns [`ApiError::MissingField`], [`ApiError::InvalidRating`], or
/// [`ApiError::InvalidUrl`].
pub fn new_bookmark(req: CreateBookmarkRequest) -> Result<NewBookmark, ApiError> {
    let title = required("title", req.title)?;
    let url = required("url", req.url)?;
    let Some(rating) = req.rating else {
        tracing::warn!(field = "rating", "required field missing");
        return Err(ApiError::MissingField("rating"));
    };

    let rating = parse_rating(rating)?;
    check_url(&url)?;

    Ok(NewBookmark {
        title,
        url,
        description: req.description,
        rating,
    })
}

/// Validates an update request.
///
/// A field counts as provided when it is present, not `null`, and (for
/// text) not empty. Once something is provided, a present `description`
/// is kept even when empty, so it can be cleared. Provided `rating` and
/// `url` values get the same checks as on create.
///
/// # Errors
///
/// Returns [`ApiError::EmptyUpdate`] if nothing is provided, otherwise
/// [`ApiError::InvalidRating`] or [`ApiError::InvalidUrl`].
pub fn bookmark_patch(req: UpdateBookmarkRequest) -> Result<BookmarkPatch, ApiError> {
    let title = non_empty(req.title);
    let url = non_empty(req.url);
    let description = req.description;

    if title.is_none()
        && url.is_none()
        && description.as_deref().is_none_or(str::is_empty)
        && req.rating.is_none()
    {
        tracing::warn!("update request without any field");
        return Err(ApiError::EmptyUpdate);
    }

    let rating = req.rating.map(parse_rating).transpose()?;
    if let Some(url) = &url {
        check_url(url)?;
    }

    Ok(BookmarkPatch {
        title,
        url,
        description,
        rating,
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn required(field: &'static str, value: Option<String>) -> Result<String, ApiError> {
    non_empty(value).ok_or_else(|| {
        tracing::warn!(field, "required field missing");
        ApiError::MissingField(field)
    })
}

/// Accepts integer-valued JSON numbers in `[0, 5]`, including `3.0`.
fn parse_rating(value: serde_json::Value) -> Result<i32, ApiError> {
    let Some(rating) = value
        .as_f64()
        .filter(|r| r.fract() == 0.0 && (MIN_RATING..=MAX_RATING).contains(r))
    else {
        tracing::warn!(rating = %value, "invalid rating supplied");
        return Err(ApiError::InvalidRating(value));
    };

    #[allow(clippy::cast_possible_truncation)]
    let rating = rating as i32;
    Ok(rating)
}

/// Accepts absolute `http`/`https` URLs with a non-empty host.
///
/// `Url::parse` trims whitespace and repairs a missing `//` for special
/// schemes, so the raw text must also carry `scheme://` and no whitespace
/// or control characters; the URL is stored as supplied.
fn check_url(url: &str) -> Result<(), ApiError> {
    let is_web_url = !url.chars().any(|c| c.is_whitespace() || c.is_control())
        && Url::parse(url).is_ok_and(|parsed| {
            matches!(parsed.scheme(), "http" | "https")
                && parsed.host_str().is_some_and(|host| !host.is_empty())
                && url
                    .get(parsed.scheme().len()..)
                    .is_some_and(|rest| rest.starts_with("://"))
        });

    if is_web_url {
        Ok(())
    } else {
        tracing::warn!(url, "invalid url supplied");
        Err(ApiError::InvalidUrl(url.to_string()))
    }
}
