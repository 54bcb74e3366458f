//! Pagination query parameters and response metadata.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

/// Pagination query parameters shared by the listing endpoints.
///
/// Uses `serde_with` to parse page numbers from query strings as
/// integers, which also keeps them parseable when this struct is
/// flattened into a larger query type.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub per_page: Option<u32>,
}

impl PaginationParams {
    /// Validates pagination parameters and converts to database
    /// offset/limit.
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `per_page`: 20
    ///
    /// # Validation
    ///
    /// - Page must be > 0
    /// - Per-page must be between 1 and 100
    ///
    /// # Returns
    ///
    /// `(offset, limit)` tuple for the repository queries.
    pub fn validate_and_get_offset_limit(&self) -> Result<(i64, i64), String> {
        let page = self.page.unwrap_or(1);
        let per_page = self.per_page.unwrap_or(20);

        if page == 0 {
            return Err("Page must be greater than 0".to_string());
        }

        if !(1..=100).contains(&per_page) {
            return Err("Per-page must be between 1 and 100".to_string());
        }

        // Widen before multiplying; u32 page numbers near the maximum
        // would overflow in u32 arithmetic.
        let offset = (page as i64 - 1) * per_page as i64;
        let limit = per_page as i64;

        Ok((offset, limit))
    }

    /// Resolved page number, defaulted.
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1)
    }

    /// Resolved page size, defaulted.
    pub fn per_page(&self) -> u32 {
        self.per_page.unwrap_or(20)
    }
}

/// Pagination metadata included in listing responses.
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub page: u32,
    pub per_page: u32,
    pub total_items: i64,
    pub total_pages: u32,
}

impl PaginationMeta {
    /// Builds metadata from resolved parameters and a total row count.
    pub fn new(page: u32, per_page: u32, total_items: i64) -> Self {
        let total_pages = ((total_items as f64) / (per_page as f64)).ceil() as u32;
        Self {
            page,
            per_page,
            total_items,
            total_pages,
        }
    }
}
