//! The HTTP transport seam.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::Value;

use crate::errors::CatalogError;

/// Fetches a JSON document by URL.
///
/// The aggregation and search layers depend on this trait rather than on a
/// concrete HTTP client, so tests substitute in-memory fakes and count
/// requests without touching the network.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// GET `url` and parse the body as JSON.
    ///
    /// Status mapping: 404 is `NotFound`, any other non-success status is
    /// `UpstreamStatus`, an unparseable body is `InvalidResponse`.
    async fn fetch_json(&self, url: &str) -> Result<Value, CatalogError>;
}

/// `Fetch` implementation over a shared `reqwest::Client`.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    /// Build a fetcher around an existing client (shared connection pool).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch_json(&self, url: &str) -> Result<Value, CatalogError> {
        debug!("catalog request: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound {
                url: url.to_string(),
            });
        }

        if !status.is_success() {
            return Err(CatalogError::UpstreamStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| CatalogError::InvalidResponse {
            message: format!("body at {} is not JSON: {}", url, e),
        })
    }
}
