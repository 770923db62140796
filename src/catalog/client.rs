use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::CatalogError;
use crate::state::data::{Product, ProductId};

/// Read-only client for the remote product catalog
///
/// Wraps a single shared `reqwest::Client`; cloning is cheap, so every
/// background task owns its own copy. No retries, no caching.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    /// Catalog base without a trailing slash
    base: String,
}

impl CatalogClient {
    pub fn new(base: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// Underlying HTTP client, shared with image downloads
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// GET {base}/products, in catalog order
    pub async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.get_json("/products").await
    }

    /// GET {base}/products/categories
    pub async fn fetch_categories(&self) -> Result<Vec<String>, CatalogError> {
        self.get_json("/products/categories").await
    }

    /// GET {base}/products/{id}
    pub async fn fetch_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        match self.get_json(&format!("/products/{}", id)).await {
            Err(CatalogError::Http { status, .. }) if status == reqwest::StatusCode::NOT_FOUND => {
                Err(CatalogError::NotFound { id })
            }
            other => other,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let body = get_bytes(&self.http, &self.endpoint(path)).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Fetch a URL and return its body, failing on any non-success status
pub(crate) async fn get_bytes(http: &reqwest::Client, url: &str) -> Result<Vec<u8>, CatalogError> {
    debug!("GET {}", url);

    let response = http.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::Http {
            status,
            url: url.to_string(),
        });
    }

    Ok(response.bytes().await?.to_vec())
}
