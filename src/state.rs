//! Shared application state.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::{ClickService, TagService, UrlService};
use crate::domain::click_event::ClickEvent;

/// State shared across all request handlers.
///
/// Cloning is cheap: services are behind `Arc` and the click sender is
/// a channel handle.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
    pub click_service: Arc<ClickService>,
    pub tag_service: Arc<TagService>,

    /// Producer side of the click recording queue. Sends are
    /// fire-and-forget; a full queue drops the event rather than
    /// delaying the redirect.
    pub click_sender: mpsc::Sender<ClickEvent>,

    /// Public base URL used to render full short links.
    pub base_url: String,

    /// When `true`, client IPs are read from forwarding headers set by
    /// a trusted reverse proxy.
    pub behind_proxy: bool,
}
