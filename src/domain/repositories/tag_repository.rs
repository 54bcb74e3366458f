//! Repository trait for tags.

use crate::domain::entities::Tag;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for tags.
///
/// Tags are created on demand when a submission references a title that
/// does not exist yet.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Finds a tag by title or creates it with the given slug.
    ///
    /// Slugs are unique across tags; when a new title collides with an
    /// existing slug, the stored slug gets a numeric suffix.
    async fn find_or_create(&self, title: &str, slug: &str) -> Result<Tag, AppError>;

    /// Finds a tag by its id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Tag>, AppError>;

    /// Lists all tags ordered by title.
    async fn list(&self) -> Result<Vec<Tag>, AppError>;
}
