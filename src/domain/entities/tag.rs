//! Tag entity used to label URLs.

use chrono::{DateTime, Utc};

/// A label attached to URLs, created on demand from free-text titles.
///
/// The slug is derived from the title and used in filter links.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tag {
    pub fn new(
        id: i64,
        title: String,
        slug: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            slug,
            created_at,
            updated_at,
        }
    }
}
