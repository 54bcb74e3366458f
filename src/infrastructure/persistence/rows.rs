//! Row types shared between the Postgres repositories.

use chrono::{DateTime, Utc};

use crate::domain::entities::Tag;

#[derive(sqlx::FromRow)]
pub(super) struct TagRow {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TagRow> for Tag {
    fn from(r: TagRow) -> Self {
        Tag::new(r.id, r.title, r.slug, r.created_at, r.updated_at)
    }
}
