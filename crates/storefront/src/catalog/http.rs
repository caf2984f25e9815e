//! reqwest-backed [`CatalogApi`](super::CatalogApi).

use super::{CatalogApi, CatalogError};
use crate::config::StorefrontConfig;
use crate::model::Product;
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Client for the three catalog endpoints:
///
/// - `GET {base}/products`
/// - `GET {base}/products/category/{category}`
/// - `GET {base}/products/categories`
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

impl HttpCatalog {
    pub fn new(config: &StorefrontConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| CatalogError::Transport {
                url: config.api_base_url.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
            timeout: config.request_timeout,
        })
    }

    /// Appends `segments` to the base path, percent-encoding each one.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, CatalogError> {
        let target = url.to_string();
        debug!(url = %target, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify(&target, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %target, status = status.as_u16(), "Catalog returned an error status");
            return Err(CatalogError::HttpStatus {
                url: target,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.classify(&target, e))?;
        serde_json::from_slice(&body).map_err(|e| CatalogError::MalformedResponse {
            url: target,
            reason: e.to_string(),
        })
    }

    async fn get_products(&self, url: Url) -> Result<Vec<Product>, CatalogError> {
        let target = url.to_string();
        let products: Vec<Product> = self.get_json(url).await?;
        for product in &products {
            product
                .validate()
                .map_err(|reason| CatalogError::MalformedResponse {
                    url: target.clone(),
                    reason,
                })?;
        }
        debug!(url = %target, count = products.len(), "Products received");
        Ok(products)
    }

    fn classify(&self, url: &str, error: reqwest::Error) -> CatalogError {
        if error.is_timeout() {
            CatalogError::Timeout {
                url: url.to_string(),
                after: self.timeout,
            }
        } else {
            CatalogError::Transport {
                url: url.to_string(),
                message: error.to_string(),
            }
        }
    }
}

#[async_trait]
impl CatalogApi for HttpCatalog {
    #[instrument(skip(self))]
    async fn fetch_all(&self) -> Result<Vec<Product>, CatalogError> {
        self.get_products(self.endpoint(&["products"])).await
    }

    #[instrument(skip(self))]
    async fn fetch_by_category(&self, category: &str) -> Result<Vec<Product>, CatalogError> {
        self.get_products(self.endpoint(&["products", "category", category]))
            .await
    }

    #[instrument(skip(self))]
    async fn fetch_categories(&self) -> Result<Vec<String>, CatalogError> {
        self.get_json(self.endpoint(&["products", "categories"]))
            .await
    }
}
