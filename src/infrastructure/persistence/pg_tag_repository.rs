//! PostgreSQL implementation of the tag repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Tag;
use crate::domain::repositories::TagRepository;
use crate::error::AppError;

use super::rows::TagRow;

/// PostgreSQL repository for tags.
pub struct PgTagRepository {
    pool: Arc<PgPool>,
}

impl PgTagRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepository for PgTagRepository {
    async fn find_or_create(&self, title: &str, slug: &str) -> Result<Tag, AppError> {
        // Upsert in one round trip; the no-op update makes RETURNING
        // yield the existing row on conflict.
        //
        // Distinct titles can collapse to the same slug ("Rust!" and
        // "rust?" both slugify to "rust"). Title conflicts are absorbed
        // by the upsert, so a remaining unique violation is the slug
        // index; retry with a numeric suffix until one is free.
        let mut candidate = slug.to_string();
        let mut n = 1u32;

        loop {
            let result = sqlx::query_as::<_, TagRow>(
                r#"
                INSERT INTO tags (title, slug)
                VALUES ($1, $2)
                ON CONFLICT (title) DO UPDATE SET updated_at = now()
                RETURNING id, title, slug, created_at, updated_at
                "#,
            )
            .bind(title)
            .bind(&candidate)
            .fetch_one(self.pool.as_ref())
            .await;

            match result {
                Ok(row) => return Ok(row.into()),
                Err(e) => {
                    let err = AppError::from(e);
                    if !err.is_conflict() {
                        return Err(err);
                    }
                    n += 1;
                    candidate = format!("{slug}-{n}");
                }
            }
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Tag>, AppError> {
        let row = sqlx::query_as::<_, TagRow>(
            "SELECT id, title, slug, created_at, updated_at FROM tags WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<Tag>, AppError> {
        let rows = sqlx::query_as::<_, TagRow>(
            "SELECT id, title, slug, created_at, updated_at FROM tags ORDER BY title",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
