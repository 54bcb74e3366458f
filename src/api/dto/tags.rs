//! DTOs for tag data.

use serde::Serialize;

use crate::domain::entities::Tag;

/// Tag attached to a URL or listed via `GET /api/tags`.
#[derive(Debug, Serialize)]
pub struct TagItem {
    pub id: i64,
    pub title: String,
    pub slug: String,
}

impl From<Tag> for TagItem {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id,
            title: tag.title,
            slug: tag.slug,
        }
    }
}

/// Response for the tag listing endpoint.
#[derive(Debug, Serialize)]
pub struct TagListResponse {
    pub items: Vec<TagItem>,
}
