//! Handlers for the URL listing, detail, click log, and delete endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;

use crate::api::dto::clicks::ClickListResponse;
use crate::api::dto::pagination::{PaginationMeta, PaginationParams};
use crate::api::dto::urls::{UrlDetailResponse, UrlListItem, UrlListQuery, UrlListResponse};
use crate::domain::repositories::UrlListFilter;
use crate::error::AppError;
use crate::state::AppState;

/// Lists stored URLs, newest first, with aggregate click counts.
///
/// # Endpoint
///
/// `GET /api/urls`
///
/// # Query Parameters
///
/// - `page` (optional): Page number (default: 1)
/// - `per_page` (optional): Items per page (default: 20, max: 100)
/// - `tag_id` (optional): Only URLs carrying this tag
/// - `author_id` (optional): Only URLs submitted by this author
///
/// # Errors
///
/// Returns 400 Bad Request if pagination parameters are invalid.
pub async fn url_list_handler(
    State(state): State<AppState>,
    Query(params): Query<UrlListQuery>,
) -> Result<Json<UrlListResponse>, AppError> {
    let (offset, limit) = params
        .pagination
        .validate_and_get_offset_limit()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let filter = UrlListFilter::new(offset, limit)
        .with_tag(params.tag_id)
        .with_author(params.author_id);

    let (urls, total_items) = state.url_service.list(filter).await?;

    let items = urls
        .into_iter()
        .map(|item| UrlListItem {
            short_link: state
                .url_service
                .short_link(&state.base_url, &item.url.short_url),
            id: item.url.id,
            long_url: item.url.long_url,
            short_url: item.url.short_url,
            created_at: item.url.created_at,
            author_id: item.url.author_id,
            click_count: item.click_count,
        })
        .collect();

    Ok(Json(UrlListResponse {
        pagination: PaginationMeta::new(
            params.pagination.page(),
            params.pagination.per_page(),
            total_items,
        ),
        items,
    }))
}

/// Returns a single URL record with its click count and tags.
///
/// # Endpoint
///
/// `GET /api/urls/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no URL has that id.
pub async fn url_detail_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<UrlDetailResponse>, AppError> {
    let url = state.url_service.get_by_id(id).await?;

    let (click_count, tags) = tokio::try_join!(
        state.click_service.count(url.id),
        state.url_service.tags_for(url.id)
    )?;

    Ok(Json(UrlDetailResponse {
        short_link: state.url_service.short_link(&state.base_url, &url.short_url),
        id: url.id,
        long_url: url.long_url,
        short_url: url.short_url,
        created_at: url.created_at,
        author_id: url.author_id,
        click_count,
        tags: tags.into_iter().map(Into::into).collect(),
    }))
}

/// Returns the paginated click log for one URL, newest first.
///
/// # Endpoint
///
/// `GET /api/urls/{id}/clicks`
///
/// # Errors
///
/// Returns 404 Not Found if no URL has that id.
/// Returns 400 Bad Request if pagination parameters are invalid.
pub async fn url_clicks_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ClickListResponse>, AppError> {
    let (offset, limit) = params
        .validate_and_get_offset_limit()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    // 404 for unknown ids, not an empty log.
    let url = state.url_service.get_by_id(id).await?;

    let (clicks, total_items) = state.click_service.list(url.id, offset, limit).await?;

    Ok(Json(ClickListResponse {
        pagination: PaginationMeta::new(params.page(), params.per_page(), total_items),
        items: clicks.into_iter().map(Into::into).collect(),
    }))
}

/// Deletes a URL; its click history goes with it.
///
/// # Endpoint
///
/// `DELETE /api/urls/{id}`
///
/// # Response
///
/// `204 No Content` on success.
///
/// # Errors
///
/// Returns 404 Not Found if no URL has that id.
pub async fn url_delete_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.url_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
