//! Handler for the URL shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::application::services::{CreateUrl, parse_tag_titles};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "long_url": "https://example.com/some/very/long/path",
///   "short_url": "my-code",      // optional custom code
///   "tags": "docs, rust",        // optional comma-separated titles
///   "author_id": 42              // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created` with the stored record, its full short link, and any
/// attached tags.
///
/// # Errors
///
/// - `400 Bad Request` when the URL or custom code fails validation
/// - `409 Conflict` when a custom code is already taken
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let tag_titles = payload
        .tags
        .as_deref()
        .map(parse_tag_titles)
        .unwrap_or_default();

    let (url, tags) = state
        .url_service
        .create(CreateUrl {
            long_url: payload.long_url,
            custom_code: payload.short_url,
            tag_titles,
            author_id: payload.author_id,
        })
        .await?;

    let short_link = state.url_service.short_link(&state.base_url, &url.short_url);

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            id: url.id,
            long_url: url.long_url,
            short_url: url.short_url,
            short_link,
            created_at: url.created_at,
            author_id: url.author_id,
            tags: tags.into_iter().map(Into::into).collect(),
        }),
    ))
}
