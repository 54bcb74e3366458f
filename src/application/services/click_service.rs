//! Click recording and counting service.

use std::sync::Arc;

use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

/// Service for recording click events and reading click history.
///
/// On the redirect path clicks are recorded asynchronously through the
/// background worker; this service is the synchronous write/read
/// surface used by the worker, the API, and tests.
pub struct ClickService {
    clicks: Arc<dyn ClickRepository>,
}

impl ClickService {
    /// Creates a new click service.
    pub fn new(clicks: Arc<dyn ClickRepository>) -> Self {
        Self { clicks }
    }

    /// Records a click for a URL with the requester's metadata.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL does not exist and
    /// [`AppError::Internal`] on storage failure.
    pub async fn record(
        &self,
        url_id: i64,
        ip_address: Option<String>,
        user_agent: Option<String>,
    ) -> Result<Click, AppError> {
        self.clicks
            .record(NewClick {
                url_id,
                ip_address,
                user_agent,
            })
            .await
    }

    /// Counts clicks for a URL with a server-side aggregate.
    pub async fn count(&self, url_id: i64) -> Result<i64, AppError> {
        self.clicks.count_by_url(url_id).await
    }

    /// Lists clicks for a URL newest first, plus the total for
    /// pagination metadata.
    pub async fn list(
        &self,
        url_id: i64,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<Click>, i64), AppError> {
        let items = self.clicks.list_by_url(url_id, offset, limit).await?;
        let total = self.clicks.count_by_url(url_id).await?;
        Ok((items, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockClickRepository;
    use chrono::Utc;

    #[tokio::test]
    async fn test_record_click() {
        let mut mock = MockClickRepository::new();
        mock.expect_record()
            .withf(|c| c.url_id == 10 && c.user_agent.as_deref() == Some("Mozilla/5.0"))
            .times(1)
            .returning(|c| {
                Ok(Click::new(
                    1,
                    c.url_id,
                    Utc::now(),
                    c.ip_address,
                    c.user_agent,
                ))
            });

        let service = ClickService::new(Arc::new(mock));

        let click = service
            .record(
                10,
                Some("192.168.1.1".to_string()),
                Some("Mozilla/5.0".to_string()),
            )
            .await
            .unwrap();

        assert_eq!(click.url_id, 10);
        assert_eq!(click.ip_address, Some("192.168.1.1".to_string()));
    }

    #[tokio::test]
    async fn test_count() {
        let mut mock = MockClickRepository::new();
        mock.expect_count_by_url()
            .withf(|id| *id == 7)
            .times(1)
            .returning(|_| Ok(42));

        let service = ClickService::new(Arc::new(mock));

        assert_eq!(service.count(7).await.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_list_returns_items_and_total() {
        let mut mock = MockClickRepository::new();
        mock.expect_list_by_url()
            .times(1)
            .returning(|url_id, _, _| {
                Ok(vec![
                    Click::new(2, url_id, Utc::now(), None, None),
                    Click::new(1, url_id, Utc::now(), None, None),
                ])
            });
        mock.expect_count_by_url().times(1).returning(|_| Ok(5));

        let service = ClickService::new(Arc::new(mock));

        let (items, total) = service.list(3, 0, 2).await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(total, 5);
    }
}
