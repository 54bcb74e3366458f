//! Repository trait for URL data access.

use crate::domain::entities::{NewUrl, Tag, Url, UrlWithClicks};
use crate::error::AppError;
use async_trait::async_trait;

/// Filter criteria for the paginated URL listing.
#[derive(Debug, Clone)]
pub struct UrlListFilter {
    pub tag_id: Option<i64>,
    pub author_id: Option<i64>,
    pub offset: i64,
    pub limit: i64,
}

impl UrlListFilter {
    /// Creates a new filter with pagination parameters.
    pub fn new(offset: i64, limit: i64) -> Self {
        Self {
            tag_id: None,
            author_id: None,
            offset,
            limit,
        }
    }

    /// Restricts the listing to URLs carrying the given tag.
    pub fn with_tag(mut self, tag_id: Option<i64>) -> Self {
        self.tag_id = tag_id;
        self
    }

    /// Restricts the listing to URLs submitted by the given author.
    pub fn with_author(mut self, author_id: Option<i64>) -> Self {
        self.author_id = author_id;
        self
    }
}

/// Repository interface for stored URLs.
///
/// Doubles as the uniqueness oracle for the short code generator via
/// [`UrlRepository::exists_by_short_url`]. The storage layer guarantees
/// read-after-write consistency: once a short code is durably assigned
/// it is visible to subsequent lookups.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - in-memory,
///   used by integration tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Persists a new URL with its chosen short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] when the short code is already
    /// taken (unique constraint). Returns [`AppError::Internal`] on
    /// other database errors.
    async fn create(&self, new_url: NewUrl) -> Result<Url, AppError>;

    /// Finds a URL by its short code, matched verbatim and
    /// case-sensitively.
    async fn find_by_short_url(&self, short_url: &str) -> Result<Option<Url>, AppError>;

    /// Finds a URL by its id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Url>, AppError>;

    /// The uniqueness oracle: does any URL already use this short code?
    async fn exists_by_short_url(&self, short_url: &str) -> Result<bool, AppError>;

    /// Deletes a URL; its clicks cascade with it.
    ///
    /// Returns `Ok(true)` if a row was deleted, `Ok(false)` if no URL
    /// has that id.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Lists URLs newest first with their aggregate click counts.
    async fn list(&self, filter: UrlListFilter) -> Result<Vec<UrlWithClicks>, AppError>;

    /// Counts URLs matching the filter (pagination metadata).
    async fn count(&self, filter: UrlListFilter) -> Result<i64, AppError>;

    /// Associates a tag with a URL. Idempotent.
    async fn attach_tag(&self, url_id: i64, tag_id: i64) -> Result<(), AppError>;

    /// Returns the tags attached to a URL.
    async fn tags_for_url(&self, url_id: i64) -> Result<Vec<Tag>, AppError>;
}
