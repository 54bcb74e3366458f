//! Repository trait for click tracking.

use crate::domain::entities::{Click, NewClick};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for click events.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryClickRepository`] - in-memory,
///   used by integration tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Records a click event as an atomic single-row insert.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the referenced URL does not
    /// exist and [`AppError::Internal`] on database errors.
    async fn record(&self, new_click: NewClick) -> Result<Click, AppError>;

    /// Counts clicks for a URL with a server-side aggregate, never by
    /// enumerating rows.
    async fn count_by_url(&self, url_id: i64) -> Result<i64, AppError>;

    /// Lists clicks for a URL, newest first.
    async fn list_by_url(
        &self,
        url_id: i64,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Click>, AppError>;
}
