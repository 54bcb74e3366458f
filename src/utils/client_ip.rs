//! Client IP extraction for click tracking.

use axum::http::HeaderMap;
use std::net::SocketAddr;

/// Determines the client IP for a request.
///
/// When `behind_proxy` is set, `X-Forwarded-For` (first hop) and
/// `X-Real-IP` are consulted before the peer socket address. Trust these
/// headers only when the service sits behind a reverse proxy that
/// overwrites them.
pub fn extract_client_ip(headers: &HeaderMap, peer: SocketAddr, behind_proxy: bool) -> String {
    if behind_proxy {
        if let Some(forwarded) = headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty())
        {
            return forwarded.to_string();
        }

        if let Some(real_ip) = headers
            .get("x-real-ip")
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
        {
            return real_ip.to_string();
        }
    }

    peer.ip().to_string()
}
