//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrl, Tag, Url, UrlWithClicks};
use crate::domain::repositories::{UrlListFilter, UrlRepository};
use crate::error::AppError;

use super::rows::TagRow;

/// PostgreSQL repository for URL storage and retrieval.
///
/// Queries are bound at runtime so the crate builds without a live
/// database; the unique index on `short_url` is what enforces the
/// global short code invariant.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UrlRow {
    id: i64,
    long_url: String,
    short_url: String,
    created_at: DateTime<Utc>,
    author_id: Option<i64>,
}

impl From<UrlRow> for Url {
    fn from(r: UrlRow) -> Self {
        Url::new(r.id, r.long_url, r.short_url, r.created_at, r.author_id)
    }
}

#[derive(sqlx::FromRow)]
struct UrlWithClicksRow {
    id: i64,
    long_url: String,
    short_url: String,
    created_at: DateTime<Utc>,
    author_id: Option<i64>,
    click_count: i64,
}

impl From<UrlWithClicksRow> for UrlWithClicks {
    fn from(r: UrlWithClicksRow) -> Self {
        UrlWithClicks {
            url: Url::new(r.id, r.long_url, r.short_url, r.created_at, r.author_id),
            click_count: r.click_count,
        }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn create(&self, new_url: NewUrl) -> Result<Url, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            INSERT INTO urls (long_url, short_url, author_id)
            VALUES ($1, $2, $3)
            RETURNING id, long_url, short_url, created_at, author_id
            "#,
        )
        .bind(&new_url.long_url)
        .bind(&new_url.short_url)
        .bind(new_url.author_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_short_url(&self, short_url: &str) -> Result<Option<Url>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, long_url, short_url, created_at, author_id
            FROM urls
            WHERE short_url = $1
            "#,
        )
        .bind(short_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Url>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, long_url, short_url, created_at, author_id
            FROM urls
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn exists_by_short_url(&self, short_url: &str) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM urls WHERE short_url = $1)",
        )
        .bind(short_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM urls WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, filter: UrlListFilter) -> Result<Vec<UrlWithClicks>, AppError> {
        let rows = sqlx::query_as::<_, UrlWithClicksRow>(
            r#"
            SELECT
                u.id,
                u.long_url,
                u.short_url,
                u.created_at,
                u.author_id,
                COUNT(c.id) AS click_count
            FROM urls u
            LEFT JOIN clicks c ON c.url_id = u.id
            WHERE ($1::bigint IS NULL OR u.author_id = $1)
              AND ($2::bigint IS NULL OR EXISTS (
                    SELECT 1 FROM url_tags ut
                    WHERE ut.url_id = u.id AND ut.tag_id = $2
              ))
            GROUP BY u.id
            ORDER BY u.created_at DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(filter.author_id)
        .bind(filter.tag_id)
        .bind(filter.limit)
        .bind(filter.offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count(&self, filter: UrlListFilter) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM urls u
            WHERE ($1::bigint IS NULL OR u.author_id = $1)
              AND ($2::bigint IS NULL OR EXISTS (
                    SELECT 1 FROM url_tags ut
                    WHERE ut.url_id = u.id AND ut.tag_id = $2
              ))
            "#,
        )
        .bind(filter.author_id)
        .bind(filter.tag_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn attach_tag(&self, url_id: i64, tag_id: i64) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO url_tags (url_id, tag_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(url_id)
        .bind(tag_id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn tags_for_url(&self, url_id: i64) -> Result<Vec<Tag>, AppError> {
        let rows = sqlx::query_as::<_, TagRow>(
            r#"
            SELECT t.id, t.title, t.slug, t.created_at, t.updated_at
            FROM tags t
            JOIN url_tags ut ON ut.tag_id = t.id
            WHERE ut.url_id = $1
            ORDER BY t.title
            "#,
        )
        .bind(url_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
