//! DTOs for the URL listing and detail endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::api::dto::pagination::{PaginationMeta, PaginationParams};
use crate::api::dto::tags::TagItem;

/// Query parameters for the URL listing endpoint.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct UrlListQuery {
    #[serde(flatten)]
    pub pagination: PaginationParams,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub tag_id: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub author_id: Option<i64>,
}

/// One URL in the paginated listing, with its aggregate click count.
#[derive(Debug, Serialize)]
pub struct UrlListItem {
    pub id: i64,
    pub long_url: String,
    pub short_url: String,
    pub short_link: String,
    pub created_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<i64>,

    pub click_count: i64,
}

/// Response for the URL listing endpoint.
#[derive(Debug, Serialize)]
pub struct UrlListResponse {
    pub pagination: PaginationMeta,
    pub items: Vec<UrlListItem>,
}

/// Single URL record with click count and tags.
#[derive(Debug, Serialize)]
pub struct UrlDetailResponse {
    pub id: i64,
    pub long_url: String,
    pub short_url: String,
    pub short_link: String,
    pub created_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<i64>,

    pub click_count: i64,
    pub tags: Vec<TagItem>,
}
