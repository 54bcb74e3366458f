//! DTOs for click event data.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::dto::pagination::PaginationMeta;
use crate::domain::entities::Click;

/// Individual click event information.
///
/// Optional fields are omitted from JSON when `None` for cleaner responses.
#[derive(Debug, Serialize)]
pub struct ClickInfo {
    pub clicked_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl From<Click> for ClickInfo {
    fn from(click: Click) -> Self {
        Self {
            clicked_at: click.created_at,
            ip: click.ip_address,
            user_agent: click.user_agent,
        }
    }
}

/// Paginated click log for one URL.
#[derive(Debug, Serialize)]
pub struct ClickListResponse {
    pub pagination: PaginationMeta,
    pub items: Vec<ClickInfo>,
}
