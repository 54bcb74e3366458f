//! Shared helpers for the handler integration tests.
//!
//! Tests run against the in-memory storage backend, so no database is
//! required. The same `MemoryStore` backs every repository handed to
//! the services, which keeps cross-table behavior (cascade deletes,
//! tag associations) faithful to the relational schema.

#![allow(dead_code)]

use std::sync::Arc;

use tokio::sync::mpsc;

use shorturl::application::services::{ClickService, TagService, UrlService};
use shorturl::domain::click_event::ClickEvent;
use shorturl::domain::click_worker::run_click_worker;
use shorturl::infrastructure::persistence::MemoryStore;
use shorturl::state::AppState;

pub const BASE_URL: &str = "http://sho.rt";

/// Builds an application state over a fresh in-memory store.
///
/// Returns the receiving end of the click queue so tests can assert on
/// emitted click events (or hand it to [`spawn_click_worker`]).
pub fn create_test_state() -> (AppState, mpsc::Receiver<ClickEvent>, MemoryStore) {
    let store = MemoryStore::new();
    let (click_tx, click_rx) = mpsc::channel(100);

    let state = AppState {
        url_service: Arc::new(UrlService::new(
            Arc::new(store.url_repository()),
            Arc::new(store.tag_repository()),
        )),
        click_service: Arc::new(ClickService::new(Arc::new(store.click_repository()))),
        tag_service: Arc::new(TagService::new(Arc::new(store.tag_repository()))),
        click_sender: click_tx,
        base_url: BASE_URL.to_string(),
        behind_proxy: false,
    };

    (state, click_rx, store)
}

/// Drains click events into the store in the background, as the real
/// server does.
pub fn spawn_click_worker(click_rx: mpsc::Receiver<ClickEvent>, store: &MemoryStore) {
    tokio::spawn(run_click_worker(
        click_rx,
        Arc::new(store.click_repository()),
    ));
}

/// Creates a URL directly in the store, bypassing the HTTP layer.
pub async fn create_test_url(store: &MemoryStore, long_url: &str, code: &str) -> i64 {
    use shorturl::domain::entities::NewUrl;
    use shorturl::domain::repositories::UrlRepository;

    store
        .url_repository()
        .create(NewUrl {
            long_url: long_url.to_string(),
            short_url: code.to_string(),
            author_id: None,
        })
        .await
        .expect("failed to seed url")
        .id
}
