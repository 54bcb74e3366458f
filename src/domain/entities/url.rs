//! Url entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A stored URL with its assigned short code.
///
/// `short_url` is optional at submission time and becomes mandatory and
/// globally unique once assigned by the generator; after that it never
/// changes. `author_id` is an opaque reference to the external user
/// system and may be absent for anonymous submissions.
#[derive(Debug, Clone, PartialEq)]
pub struct Url {
    pub id: i64,
    pub long_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub author_id: Option<i64>,
}

impl Url {
    /// Creates a new Url instance.
    pub fn new(
        id: i64,
        long_url: String,
        short_url: String,
        created_at: DateTime<Utc>,
        author_id: Option<i64>,
    ) -> Self {
        Self {
            id,
            long_url,
            short_url,
            created_at,
            author_id,
        }
    }
}

/// Input data for persisting a new Url.
///
/// The short code has already been chosen (deterministic candidate,
/// random fallback, or validated custom code) by the time this struct
/// reaches the repository.
#[derive(Debug, Clone)]
pub struct NewUrl {
    pub long_url: String,
    pub short_url: String,
    pub author_id: Option<i64>,
}

/// A Url together with its aggregate click count, as returned by the
/// listing query. The count is computed server-side with a `COUNT` over
/// the clicks foreign key, never by loading click rows.
#[derive(Debug, Clone)]
pub struct UrlWithClicks {
    pub url: Url,
    pub click_count: i64,
}
