//! In-memory implementations of the repository traits.
//!
//! A single [`MemoryStore`] backs all three repositories so that
//! cross-table behavior (cascade deletion of clicks, tag associations)
//! matches the relational schema. Used by integration tests and useful
//! for running the service without a database.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;

use crate::domain::entities::{Click, NewClick, NewUrl, Tag, Url, UrlWithClicks};
use crate::domain::repositories::{ClickRepository, TagRepository, UrlListFilter, UrlRepository};
use crate::error::AppError;

#[derive(Default)]
struct Inner {
    urls: BTreeMap<i64, Url>,
    code_index: HashMap<String, i64>,
    clicks: BTreeMap<i64, Click>,
    tags: BTreeMap<i64, Tag>,
    title_index: HashMap<String, i64>,
    url_tags: HashMap<i64, BTreeSet<i64>>,
    next_url_id: i64,
    next_click_id: i64,
    next_tag_id: i64,
}

impl Inner {
    fn click_count(&self, url_id: i64) -> i64 {
        self.clicks.values().filter(|c| c.url_id == url_id).count() as i64
    }

    fn matches_filter(&self, url: &Url, filter: &UrlListFilter) -> bool {
        if let Some(author_id) = filter.author_id
            && url.author_id != Some(author_id)
        {
            return false;
        }

        if let Some(tag_id) = filter.tag_id {
            return self
                .url_tags
                .get(&url.id)
                .is_some_and(|tags| tags.contains(&tag_id));
        }

        true
    }

    fn filtered_urls(&self, filter: &UrlListFilter) -> Vec<&Url> {
        let mut urls: Vec<&Url> = self
            .urls
            .values()
            .filter(|u| self.matches_filter(u, filter))
            .collect();

        // Newest first, id as tiebreak for identical timestamps.
        urls.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        urls
    }
}

/// Shared in-memory storage handed out to the repository handles.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a URL repository over this store.
    pub fn url_repository(&self) -> MemoryUrlRepository {
        MemoryUrlRepository {
            store: self.clone(),
        }
    }

    /// Returns a click repository over this store.
    pub fn click_repository(&self) -> MemoryClickRepository {
        MemoryClickRepository {
            store: self.clone(),
        }
    }

    /// Returns a tag repository over this store.
    pub fn tag_repository(&self) -> MemoryTagRepository {
        MemoryTagRepository {
            store: self.clone(),
        }
    }
}

/// In-memory [`UrlRepository`].
pub struct MemoryUrlRepository {
    store: MemoryStore,
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn create(&self, new_url: NewUrl) -> Result<Url, AppError> {
        let mut inner = self.store.inner.write().expect("memory store poisoned");

        // Check-and-insert under one lock mirrors the database unique
        // constraint: a taken code is a conflict, not a silent overwrite.
        if inner.code_index.contains_key(&new_url.short_url) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "urls_short_url_key" }),
            ));
        }

        inner.next_url_id += 1;
        let url = Url::new(
            inner.next_url_id,
            new_url.long_url,
            new_url.short_url,
            Utc::now(),
            new_url.author_id,
        );

        inner.code_index.insert(url.short_url.clone(), url.id);
        inner.urls.insert(url.id, url.clone());

        Ok(url)
    }

    async fn find_by_short_url(&self, short_url: &str) -> Result<Option<Url>, AppError> {
        let inner = self.store.inner.read().expect("memory store poisoned");

        Ok(inner
            .code_index
            .get(short_url)
            .and_then(|id| inner.urls.get(id))
            .cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Url>, AppError> {
        let inner = self.store.inner.read().expect("memory store poisoned");
        Ok(inner.urls.get(&id).cloned())
    }

    async fn exists_by_short_url(&self, short_url: &str) -> Result<bool, AppError> {
        let inner = self.store.inner.read().expect("memory store poisoned");
        Ok(inner.code_index.contains_key(short_url))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut inner = self.store.inner.write().expect("memory store poisoned");

        let Some(url) = inner.urls.remove(&id) else {
            return Ok(false);
        };

        inner.code_index.remove(&url.short_url);
        inner.url_tags.remove(&id);
        // Cascade: the clicks belong to the URL.
        inner.clicks.retain(|_, c| c.url_id != id);

        Ok(true)
    }

    async fn list(&self, filter: UrlListFilter) -> Result<Vec<UrlWithClicks>, AppError> {
        let inner = self.store.inner.read().expect("memory store poisoned");

        let items = inner
            .filtered_urls(&filter)
            .into_iter()
            .skip(filter.offset.max(0) as usize)
            .take(filter.limit.max(0) as usize)
            .map(|url| UrlWithClicks {
                url: url.clone(),
                click_count: inner.click_count(url.id),
            })
            .collect();

        Ok(items)
    }

    async fn count(&self, filter: UrlListFilter) -> Result<i64, AppError> {
        let inner = self.store.inner.read().expect("memory store poisoned");
        Ok(inner.filtered_urls(&filter).len() as i64)
    }

    async fn attach_tag(&self, url_id: i64, tag_id: i64) -> Result<(), AppError> {
        let mut inner = self.store.inner.write().expect("memory store poisoned");
        inner.url_tags.entry(url_id).or_default().insert(tag_id);
        Ok(())
    }

    async fn tags_for_url(&self, url_id: i64) -> Result<Vec<Tag>, AppError> {
        let inner = self.store.inner.read().expect("memory store poisoned");

        let mut tags: Vec<Tag> = inner
            .url_tags
            .get(&url_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| inner.tags.get(id))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        tags.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(tags)
    }
}

/// In-memory [`ClickRepository`].
pub struct MemoryClickRepository {
    store: MemoryStore,
}

#[async_trait]
impl ClickRepository for MemoryClickRepository {
    async fn record(&self, new_click: NewClick) -> Result<Click, AppError> {
        let mut inner = self.store.inner.write().expect("memory store poisoned");

        if !inner.urls.contains_key(&new_click.url_id) {
            return Err(AppError::bad_request(
                "Referenced record does not exist",
                json!({ "url_id": new_click.url_id }),
            ));
        }

        inner.next_click_id += 1;
        let click = Click::new(
            inner.next_click_id,
            new_click.url_id,
            Utc::now(),
            new_click.ip_address,
            new_click.user_agent,
        );

        inner.clicks.insert(click.id, click.clone());
        Ok(click)
    }

    async fn count_by_url(&self, url_id: i64) -> Result<i64, AppError> {
        let inner = self.store.inner.read().expect("memory store poisoned");
        Ok(inner.click_count(url_id))
    }

    async fn list_by_url(
        &self,
        url_id: i64,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Click>, AppError> {
        let inner = self.store.inner.read().expect("memory store poisoned");

        let mut clicks: Vec<Click> = inner
            .clicks
            .values()
            .filter(|c| c.url_id == url_id)
            .cloned()
            .collect();

        clicks.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        Ok(clicks
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }
}

/// In-memory [`TagRepository`].
pub struct MemoryTagRepository {
    store: MemoryStore,
}

#[async_trait]
impl TagRepository for MemoryTagRepository {
    async fn find_or_create(&self, title: &str, slug: &str) -> Result<Tag, AppError> {
        let mut inner = self.store.inner.write().expect("memory store poisoned");

        if let Some(id) = inner.title_index.get(title)
            && let Some(tag) = inner.tags.get(id)
        {
            return Ok(tag.clone());
        }

        // Mirror the unique slug index: a new title whose slug is
        // already taken gets a numeric suffix.
        let mut candidate = slug.to_string();
        let mut n = 1u32;
        while inner.tags.values().any(|t| t.slug == candidate) {
            n += 1;
            candidate = format!("{slug}-{n}");
        }

        inner.next_tag_id += 1;
        let now = Utc::now();
        let tag = Tag::new(inner.next_tag_id, title.to_string(), candidate, now, now);

        inner.title_index.insert(tag.title.clone(), tag.id);
        inner.tags.insert(tag.id, tag.clone());

        Ok(tag)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Tag>, AppError> {
        let inner = self.store.inner.read().expect("memory store poisoned");
        Ok(inner.tags.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Tag>, AppError> {
        let inner = self.store.inner.read().expect("memory store poisoned");

        let mut tags: Vec<Tag> = inner.tags.values().cloned().collect();
        tags.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_url(long_url: &str, code: &str) -> NewUrl {
        NewUrl {
            long_url: long_url.to_string(),
            short_url: code.to_string(),
            author_id: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let store = MemoryStore::new();
        let repo = store.url_repository();

        let url = repo
            .create(new_url("https://example.com", "abc1234"))
            .await
            .unwrap();

        let found = repo.find_by_short_url("abc1234").await.unwrap().unwrap();
        assert_eq!(found, url);
        assert!(repo.find_by_short_url("other").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_short_url_lookup_is_case_sensitive() {
        let store = MemoryStore::new();
        let repo = store.url_repository();

        repo.create(new_url("https://example.com", "AbC1234"))
            .await
            .unwrap();

        assert!(repo.find_by_short_url("AbC1234").await.unwrap().is_some());
        assert!(repo.find_by_short_url("abc1234").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_code_conflicts() {
        let store = MemoryStore::new();
        let repo = store.url_repository();

        repo.create(new_url("https://one.example", "abc1234"))
            .await
            .unwrap();

        let err = repo
            .create(new_url("https://two.example", "abc1234"))
            .await
            .unwrap_err();

        assert!(err.is_conflict());
    }

    #[tokio::test]
    async fn test_exists_oracle() {
        let store = MemoryStore::new();
        let repo = store.url_repository();

        assert!(!repo.exists_by_short_url("abc1234").await.unwrap());

        repo.create(new_url("https://example.com", "abc1234"))
            .await
            .unwrap();

        assert!(repo.exists_by_short_url("abc1234").await.unwrap());
    }

    #[tokio::test]
    async fn test_click_accumulation() {
        let store = MemoryStore::new();
        let urls = store.url_repository();
        let clicks = store.click_repository();

        let url = urls
            .create(new_url("https://example.com", "abc1234"))
            .await
            .unwrap();

        for i in 0..5 {
            clicks
                .record(NewClick {
                    url_id: url.id,
                    ip_address: Some(format!("10.0.0.{i}")),
                    user_agent: None,
                })
                .await
                .unwrap();
        }

        assert_eq!(clicks.count_by_url(url.id).await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_click_requires_existing_url() {
        let store = MemoryStore::new();
        let clicks = store.click_repository();

        let result = clicks
            .record(NewClick {
                url_id: 404,
                ip_address: None,
                user_agent: None,
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_delete_cascades_clicks() {
        let store = MemoryStore::new();
        let urls = store.url_repository();
        let clicks = store.click_repository();

        let url = urls
            .create(new_url("https://example.com", "abc1234"))
            .await
            .unwrap();

        clicks
            .record(NewClick {
                url_id: url.id,
                ip_address: None,
                user_agent: None,
            })
            .await
            .unwrap();

        assert!(urls.delete(url.id).await.unwrap());
        assert_eq!(clicks.count_by_url(url.id).await.unwrap(), 0);
        assert!(urls.find_by_short_url("abc1234").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_with_tag_filter() {
        let store = MemoryStore::new();
        let urls = store.url_repository();
        let tags = store.tag_repository();

        let a = urls
            .create(new_url("https://a.example", "aaaaaaa"))
            .await
            .unwrap();
        let _b = urls
            .create(new_url("https://b.example", "bbbbbbb"))
            .await
            .unwrap();

        let tag = tags.find_or_create("rust", "rust").await.unwrap();
        urls.attach_tag(a.id, tag.id).await.unwrap();

        let filter = UrlListFilter::new(0, 10).with_tag(Some(tag.id));
        let items = urls.list(filter.clone()).await.unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].url.id, a.id);
        assert_eq!(urls.count(filter).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_find_or_create_is_idempotent() {
        let store = MemoryStore::new();
        let tags = store.tag_repository();

        let first = tags.find_or_create("rust", "rust").await.unwrap();
        let second = tags.find_or_create("rust", "rust").await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(tags.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_colliding_slugs_get_suffixes() {
        let store = MemoryStore::new();
        let tags = store.tag_repository();

        let first = tags.find_or_create("Rust!", "rust").await.unwrap();
        let second = tags.find_or_create("rust?", "rust").await.unwrap();
        let third = tags.find_or_create("Rust.", "rust").await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.slug, "rust");
        assert_eq!(second.slug, "rust-2");
        assert_eq!(third.slug, "rust-3");
    }

    #[tokio::test]
    async fn test_concurrent_inserts_unique_codes() {
        let store = MemoryStore::new();
        let mut handles = vec![];

        for i in 0..10u32 {
            let repo = store.url_repository();
            handles.push(tokio::spawn(async move {
                repo.create(NewUrl {
                    long_url: format!("https://example{i}.com"),
                    short_url: format!("code{i:03}"),
                    author_id: None,
                })
                .await
                .unwrap()
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        let repo = store.url_repository();
        let filter = UrlListFilter::new(0, 100);
        assert_eq!(repo.count(filter).await.unwrap(), 10);
    }
}
