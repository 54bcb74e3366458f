//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};
use metrics::counter;
use std::net::SocketAddr;
use tracing::warn;

use crate::domain::click_event::ClickEvent;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::extract_client_ip;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Look up the code verbatim (case-sensitive, no normalization)
/// 2. Send a click event to the background worker
/// 3. Return `302 Found` with the stored long URL in `Location`
///
/// # Click Tracking
///
/// Click events are sent to a bounded channel for async processing.
/// If the queue is full, the click is dropped; the redirect never
/// waits on analytics.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<impl IntoResponse, AppError> {
    let url = state.url_service.resolve(&code).await?;

    let click_event = ClickEvent::new(
        url.id,
        Some(extract_client_ip(&headers, addr, state.behind_proxy)),
        headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok()),
    );

    if state.click_sender.try_send(click_event).is_err() {
        counter!("clicks_dropped_total").increment(1);
        warn!(code = %code, "click queue full, dropping event");
    }

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, url.long_url)],
    ))
}
