//! Handler for the tag listing endpoint.

use axum::{Json, extract::State};

use crate::api::dto::tags::TagListResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all known tags, ordered by title.
///
/// # Endpoint
///
/// `GET /api/tags`
pub async fn tag_list_handler(
    State(state): State<AppState>,
) -> Result<Json<TagListResponse>, AppError> {
    let tags = state.tag_service.list().await?;

    Ok(Json(TagListResponse {
        items: tags.into_iter().map(Into::into).collect(),
    }))
}
