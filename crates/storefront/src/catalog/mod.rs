//! # Catalog Client
//!
//! Read-only access to the remote product catalog.
//!
//! [`CatalogApi`] is the seam the page depends on; [`HttpCatalog`] is the production
//! implementation. There is no caching: every call is a fresh request.

pub mod error;
pub mod http;

pub use error::*;
pub use http::*;

use crate::model::Product;
use async_trait::async_trait;

#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// The full product list.
    async fn fetch_all(&self) -> Result<Vec<Product>, CatalogError>;

    /// Products in one category, scoped by the server.
    async fn fetch_by_category(&self, category: &str) -> Result<Vec<Product>, CatalogError>;

    /// The distinct category labels.
    async fn fetch_categories(&self) -> Result<Vec<String>, CatalogError>;

    /// `fetch_by_category` when a category is selected, `fetch_all` otherwise.
    async fn fetch_products(&self, category: Option<&str>) -> Result<Vec<Product>, CatalogError> {
        match category {
            Some(category) => self.fetch_by_category(category).await,
            None => self.fetch_all().await,
        }
    }
}
