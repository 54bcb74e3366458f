//! DTOs for the URL shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::tags::TagItem;
use chrono::{DateTime, Utc};

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be an absolute http(s) URL).
    #[validate(length(min = 1, max = 2048, message = "URL must be 1-2048 characters"))]
    pub long_url: String,

    /// Optional custom short code (1-30 alphanumeric characters).
    pub short_url: Option<String>,

    /// Optional comma-separated tag titles, created on demand.
    pub tags: Option<String>,

    /// Optional identifier of the submitting author.
    pub author_id: Option<i64>,
}

/// Response containing the stored record.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub id: i64,
    pub long_url: String,
    pub short_url: String,
    pub short_link: String,
    pub created_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<i64>,

    pub tags: Vec<TagItem>,
}
