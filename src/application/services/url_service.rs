//! URL submission, short code assignment, and resolution service.

use std::sync::Arc;

use serde_json::json;
use tracing::warn;

use crate::domain::entities::{NewUrl, Tag, Url, UrlWithClicks};
use crate::domain::repositories::{TagRepository, UrlListFilter, UrlRepository};
use crate::error::AppError;
use crate::utils::code_generator::{candidate_code, random_code, validate_custom_code};
use crate::utils::slug::slugify;
use crate::utils::url_check::validate_long_url;

/// Input for creating a shortened URL.
#[derive(Debug, Clone)]
pub struct CreateUrl {
    pub long_url: String,
    /// Optional caller-chosen short code; generated when absent.
    pub custom_code: Option<String>,
    /// Free-text tag titles, created on demand.
    pub tag_titles: Vec<String>,
    pub author_id: Option<i64>,
}

/// Service for creating, resolving, listing, and deleting short URLs.
///
/// Owns the short code assignment policy: a deterministic content-derived
/// candidate first, random codes on collision, with the storage unique
/// constraint as the final authority.
pub struct UrlService {
    urls: Arc<dyn UrlRepository>,
    tags: Arc<dyn TagRepository>,
}

impl UrlService {
    /// Creates a new URL service.
    pub fn new(urls: Arc<dyn UrlRepository>, tags: Arc<dyn TagRepository>) -> Self {
        Self { urls, tags }
    }

    /// Creates a short URL and attaches its tags.
    ///
    /// # Code Assignment
    ///
    /// - A custom code, when provided, is validated (1-30 alphanumeric)
    ///   and used as-is; a taken code is a conflict surfaced to the
    ///   caller.
    /// - Otherwise the code is generated: deterministic candidate from
    ///   the URL content, then uniform random 7-character draws until an
    ///   unused code is found. The 62^7 keyspace makes the retry loop
    ///   terminate in practice.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed long URL or
    /// custom code, [`AppError::Conflict`] for a taken custom code, and
    /// [`AppError::Internal`] on storage failure.
    pub async fn create(&self, input: CreateUrl) -> Result<(Url, Vec<Tag>), AppError> {
        validate_long_url(&input.long_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        let url = if let Some(custom) = input.custom_code {
            validate_custom_code(&custom)?;

            if self.urls.exists_by_short_url(&custom).await? {
                return Err(AppError::conflict(
                    "Short code already exists",
                    json!({ "code": custom }),
                ));
            }

            self.urls
                .create(NewUrl {
                    long_url: input.long_url,
                    short_url: custom,
                    author_id: input.author_id,
                })
                .await?
        } else {
            self.generate_and_insert(input.long_url, input.author_id)
                .await?
        };

        let mut tags = Vec::with_capacity(input.tag_titles.len());
        for title in &input.tag_titles {
            let slug = slugify(title);
            if slug.is_empty() {
                continue;
            }

            let tag = self.tags.find_or_create(title, &slug).await?;
            self.urls.attach_tag(url.id, tag.id).await?;
            tags.push(tag);
        }

        Ok((url, tags))
    }

    /// Inserts the URL under a generated short code.
    ///
    /// The existence pre-check keeps the common path to one read; the
    /// unique constraint closes the race between concurrent submissions
    /// that both pass the pre-check, turning the loser's insert into a
    /// conflict that re-enters the random path.
    async fn generate_and_insert(
        &self,
        long_url: String,
        author_id: Option<i64>,
    ) -> Result<Url, AppError> {
        let mut code = candidate_code(&long_url);

        loop {
            if !self.urls.exists_by_short_url(&code).await? {
                let attempt = self
                    .urls
                    .create(NewUrl {
                        long_url: long_url.clone(),
                        short_url: code.clone(),
                        author_id,
                    })
                    .await;

                match attempt {
                    Ok(url) => return Ok(url),
                    Err(e) if e.is_conflict() => {
                        warn!(code = %code, "short code taken by concurrent insert, retrying");
                    }
                    Err(e) => return Err(e),
                }
            }

            code = random_code();
        }
    }

    /// Resolves a short code to its URL.
    ///
    /// The code is matched verbatim and case-sensitively; this is a
    /// read-only lookup with no side effects. Click recording is the
    /// caller's separate step.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no URL has that code.
    pub async fn resolve(&self, code: &str) -> Result<Url, AppError> {
        self.urls
            .find_by_short_url(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    /// Retrieves a URL by id.
    pub async fn get_by_id(&self, id: i64) -> Result<Url, AppError> {
        self.urls
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("URL not found", json!({ "id": id })))
    }

    /// Deletes a URL; its click history goes with it (cascade).
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if self.urls.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found("URL not found", json!({ "id": id })))
        }
    }

    /// Lists URLs newest first with click counts, plus the total for
    /// pagination metadata.
    pub async fn list(&self, filter: UrlListFilter) -> Result<(Vec<UrlWithClicks>, i64), AppError> {
        let items = self.urls.list(filter.clone()).await?;
        let total = self.urls.count(filter).await?;
        Ok((items, total))
    }

    /// Returns the tags attached to a URL.
    pub async fn tags_for(&self, url_id: i64) -> Result<Vec<Tag>, AppError> {
        self.urls.tags_for_url(url_id).await
    }

    /// Renders the shareable short link for a code.
    pub fn short_link(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }
}
