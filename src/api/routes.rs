//! API route configuration.

use crate::api::handlers::{
    shorten_handler, tag_list_handler, url_clicks_handler, url_delete_handler, url_detail_handler,
    url_list_handler,
};
use crate::api::middleware::rate_limit;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All JSON API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST   /shorten`            - Create a shortened URL (rate limited per IP)
/// - `GET    /urls`               - Paginated listing with click counts
/// - `GET    /urls/{id}`          - Single record with click count and tags
/// - `GET    /urls/{id}/clicks`   - Paginated click log
/// - `DELETE /urls/{id}`          - Delete a URL and its click history
/// - `GET    /tags`               - List known tags
pub fn api_routes() -> Router<AppState> {
    let submission = Router::new()
        .route("/shorten", post(shorten_handler))
        .layer(rate_limit::layer());

    Router::new()
        .merge(submission)
        .route("/urls", get(url_list_handler))
        .route(
            "/urls/{id}",
            get(url_detail_handler).delete(url_delete_handler),
        )
        .route("/urls/{id}/clicks", get(url_clicks_handler))
        .route("/tags", get(tag_list_handler))
}
