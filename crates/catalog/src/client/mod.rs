//! HTTP client for the catalog.
//!
//! [`CatalogClient`] owns the base URL and a [`Fetch`] transport, and exposes
//! the four read operations the catalog supports: a list page, an item by id,
//! an item by canonical URL, and a per-category search. There is no write
//! path and no retry machinery; a failed request surfaces once and the caller
//! decides whether to retry.

mod fetch;
mod pagination;

pub use fetch::{Fetch, HttpFetcher};
pub use pagination::{clamp_page, page_window};

use serde_json::Value;

use crate::errors::CatalogError;
use crate::models::{Category, Page, Resource};

/// Base URL of the public catalog.
pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";

/// Read-only client for the catalog API.
pub struct CatalogClient<F = HttpFetcher> {
    base_url: String,
    fetcher: F,
}

impl CatalogClient<HttpFetcher> {
    /// Client against the public catalog with a fresh HTTP transport.
    pub fn new() -> Self {
        Self::with_fetcher(DEFAULT_BASE_URL, HttpFetcher::new())
    }
}

impl Default for CatalogClient<HttpFetcher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Fetch> CatalogClient<F> {
    /// Client with an explicit base URL and transport.
    pub fn with_fetcher(base_url: impl Into<String>, fetcher: F) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url, fetcher }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The underlying transport, for layers that fetch by canonical URL.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Fetch one page of a category listing.
    ///
    /// `page` must be >= 1; the result preserves upstream ordering.
    pub async fn list_page(
        &self,
        category: Category,
        page: u64,
    ) -> Result<Page<Resource>, CatalogError> {
        if page == 0 {
            return Err(CatalogError::InvalidPage { page });
        }
        let url = format!("{}/{}/?page={}", self.base_url, category, page);
        let value = self.fetcher.fetch_json(&url).await?;
        self.parse_page(category, value)
    }

    /// Fetch a single resource by category and id.
    pub async fn get_by_id(&self, category: Category, id: &str) -> Result<Resource, CatalogError> {
        let url = format!("{}/{}/{}/", self.base_url, category, id);
        let value = self.fetcher.fetch_json(&url).await?;
        Resource::from_value(category, value)
    }

    /// Fetch a single resource by its canonical URL.
    ///
    /// Used for relation resolution, where only the URL is known; the
    /// category is inferred from the URL path.
    pub async fn get_by_url(&self, url: &str) -> Result<Resource, CatalogError> {
        let category =
            crate::urls::category_from_url(url).ok_or_else(|| CatalogError::InvalidResponse {
                message: format!("URL names no known category: {}", url),
            })?;
        let value = self.fetcher.fetch_json(url).await?;
        Resource::from_value(category, value)
    }

    /// Search one category. Returns the upstream match list for the query,
    /// in upstream order.
    pub async fn search(
        &self,
        category: Category,
        query: &str,
    ) -> Result<Vec<Resource>, CatalogError> {
        let url = format!(
            "{}/{}/?search={}",
            self.base_url,
            category,
            urlencoding::encode(query)
        );
        let value = self.fetcher.fetch_json(&url).await?;
        Ok(self.parse_page(category, value)?.results)
    }

    /// Walk a category's pages to exhaustion by following `next` links.
    pub async fn fetch_all(&self, category: Category) -> Result<Vec<Resource>, CatalogError> {
        let mut all = Vec::new();
        let mut next = Some(format!("{}/{}/", self.base_url, category));
        while let Some(url) = next {
            let value = self.fetcher.fetch_json(&url).await?;
            let page = self.parse_page(category, value)?;
            all.extend(page.results);
            next = page.next;
        }
        Ok(all)
    }

    fn parse_page(&self, category: Category, value: Value) -> Result<Page<Resource>, CatalogError> {
        let raw: Page<Value> =
            serde_json::from_value(value).map_err(|e| CatalogError::InvalidResponse {
                message: format!("malformed page envelope: {}", e),
            })?;
        let results = raw
            .results
            .into_iter()
            .map(|item| Resource::from_value(category, item))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Page {
            count: raw.count,
            next: raw.next,
            previous: raw.previous,
            results,
        })
    }
}
