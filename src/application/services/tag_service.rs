//! Tag lookup service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::Tag;
use crate::domain::repositories::TagRepository;
use crate::error::AppError;

/// Service exposing tags as filter inputs for the listing endpoints.
pub struct TagService {
    tags: Arc<dyn TagRepository>,
}

impl TagService {
    /// Creates a new tag service.
    pub fn new(tags: Arc<dyn TagRepository>) -> Self {
        Self { tags }
    }

    /// Lists all known tags.
    pub async fn list(&self) -> Result<Vec<Tag>, AppError> {
        self.tags.list().await
    }

    /// Retrieves a tag by id.
    pub async fn get_by_id(&self, id: i64) -> Result<Tag, AppError> {
        self.tags
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Tag not found", json!({ "id": id })))
    }
}

/// Splits a comma-separated tag list into cleaned titles.
///
/// Empty segments are dropped and duplicates (case-insensitive) keep
/// their first occurrence.
pub fn parse_tag_titles(input: &str) -> Vec<String> {
    let mut seen = Vec::new();
    let mut titles = Vec::new();

    for raw in input.split(',') {
        let title = raw.trim();
        if title.is_empty() {
            continue;
        }

        let key = title.to_lowercase();
        if seen.contains(&key) {
            continue;
        }

        seen.push(key);
        titles.push(title.to_string());
    }

    titles
}
