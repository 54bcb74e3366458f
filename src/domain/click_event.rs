//! Click event model for asynchronous click tracking.

/// An in-memory click event passed from the redirect handler to the
/// background worker over a bounded channel.
///
/// Decoupling the database write from the HTTP response keeps redirects
/// fast and makes click recording best-effort: a full queue drops the
/// event, never the redirect.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub url_id: i64,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

impl ClickEvent {
    /// Creates a new click event for the given URL id.
    pub fn new(url_id: i64, ip_address: Option<String>, user_agent: Option<&str>) -> Self {
        Self {
            url_id,
            ip_address,
            user_agent: user_agent.map(|s| s.to_string()),
        }
    }
}
