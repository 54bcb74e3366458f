//! Background worker persisting click events.

use std::sync::Arc;

use metrics::counter;
use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::domain::click_event::ClickEvent;
use crate::domain::entities::NewClick;
use crate::domain::repositories::ClickRepository;

/// Drains the click event channel and persists each event.
///
/// Runs until every sender is dropped. A failed insert is logged and
/// counted but does not stop the worker; the redirect that produced the
/// event has already been served.
pub async fn run_click_worker(
    mut rx: mpsc::Receiver<ClickEvent>,
    clicks: Arc<dyn ClickRepository>,
) {
    while let Some(event) = rx.recv().await {
        let new_click = NewClick {
            url_id: event.url_id,
            ip_address: event.ip_address,
            user_agent: event.user_agent,
        };

        match clicks.record(new_click).await {
            Ok(click) => {
                counter!("clicks_recorded_total").increment(1);
                debug!(url_id = click.url_id, click_id = click.id, "click recorded");
            }
            Err(e) => {
                counter!("clicks_failed_total").increment(1);
                error!(url_id = event.url_id, error = %e, "failed to record click");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Click;
    use crate::domain::repositories::MockClickRepository;
    use crate::error::AppError;
    use chrono::Utc;
    use serde_json::json;

    #[tokio::test]
    async fn test_worker_persists_events() {
        let mut mock = MockClickRepository::new();
        mock.expect_record()
            .withf(|c| c.url_id == 5 && c.ip_address.as_deref() == Some("1.2.3.4"))
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

        let (tx, rx) = mpsc::channel(8);
        let worker = tokio::spawn(run_click_worker(rx, Arc::new(mock)));

        tx.send(ClickEvent::new(
            5,
            Some("1.2.3.4".to_string()),
            Some("TestBot/1.0"),
        ))
        .await
        .unwrap();

        drop(tx);
        worker.await.unwrap();
    }

    #[tokio::test]
    async fn test_worker_survives_record_failure() {
        let mut mock = MockClickRepository::new();
        mock.expect_record()
            .times(2)
            .returning(|c| match c.url_id {
                1 => Err(AppError::internal("Database error", json!({}))),
                _ => Ok(Click::new(2, c.url_id, Utc::now(), None, None)),
            });

        let (tx, rx) = mpsc::channel(8);
        let worker = tokio::spawn(run_click_worker(rx, Arc::new(mock)));

        tx.send(ClickEvent::new(1, None, None)).await.unwrap();
        tx.send(ClickEvent::new(2, None, None)).await.unwrap();

        drop(tx);
        // The worker must process the second event after the first fails.
        worker.await.unwrap();
    }
}
