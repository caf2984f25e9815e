#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use storefront::catalog::{CatalogApi, CatalogError};
use storefront::model::Product;

struct Reply {
    delay: Duration,
    result: Result<Vec<Product>, CatalogError>,
}

/// An in-memory catalog with scripted replies per scope (`None` is the full list).
///
/// Replies for a scope are used in order; the last one repeats once the queue runs
/// dry. Every product fetch is logged.
#[derive(Clone, Default)]
pub struct ScriptedCatalog {
    replies: Arc<Mutex<HashMap<Option<String>, VecDeque<Reply>>>>,
    categories: Arc<Mutex<Option<Result<Vec<String>, CatalogError>>>>,
    calls: Arc<Mutex<Vec<Option<String>>>>,
}

impl ScriptedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, scope: Option<&str>, result: Result<Vec<Product>, CatalogError>) -> Self {
        self.reply_after(scope, Duration::ZERO, result)
    }

    pub fn reply_after(
        self,
        scope: Option<&str>,
        delay: Duration,
        result: Result<Vec<Product>, CatalogError>,
    ) -> Self {
        self.replies
            .lock()
            .unwrap()
            .entry(scope.map(str::to_string))
            .or_default()
            .push_back(Reply { delay, result });
        self
    }

    pub fn with_categories(self, result: Result<Vec<String>, CatalogError>) -> Self {
        *self.categories.lock().unwrap() = Some(result);
        self
    }

    /// Scopes fetched so far, in call order.
    pub fn calls(&self) -> Vec<Option<String>> {
        self.calls.lock().unwrap().clone()
    }

    async fn products(&self, scope: Option<String>) -> Result<Vec<Product>, CatalogError> {
        self.calls.lock().unwrap().push(scope.clone());
        let (delay, result) = {
            let mut replies = self.replies.lock().unwrap();
            let queue = replies.entry(scope).or_default();
            let reply = if queue.len() > 1 {
                queue.pop_front()
            } else {
                queue.front().map(|reply| Reply {
                    delay: reply.delay,
                    result: reply.result.clone(),
                })
            };
            match reply {
                Some(reply) => (reply.delay, reply.result),
                None => (Duration::ZERO, Ok(Vec::new())),
            }
        };
        tokio::time::sleep(delay).await;
        result
    }
}

#[async_trait]
impl CatalogApi for ScriptedCatalog {
    async fn fetch_all(&self) -> Result<Vec<Product>, CatalogError> {
        self.products(None).await
    }

    async fn fetch_by_category(&self, category: &str) -> Result<Vec<Product>, CatalogError> {
        self.products(Some(category.to_string())).await
    }

    async fn fetch_categories(&self) -> Result<Vec<String>, CatalogError> {
        self.categories
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

pub fn red_shirt() -> Product {
    Product::new(1, "Red Shirt", 19.99, "clothing").with_rating(4.1, 259)
}

pub fn catalog_products() -> Vec<Product> {
    vec![
        red_shirt(),
        Product::new(2, "Blue Jeans", 49.5, "clothing").with_rating(3.5, 70),
        Product::new(3, "SSD 1TB", 109.0, "electronics").with_rating(4.8, 319),
        Product::new(4, "Gold Ring", 695.0, "jewelery").with_rating(4.6, 400),
    ]
}

pub fn electronics() -> Vec<Product> {
    vec![
        Product::new(3, "SSD 1TB", 109.0, "electronics").with_rating(4.8, 319),
        Product::new(5, "Monitor 27in", 599.0, "electronics").with_rating(2.9, 250),
    ]
}

pub fn server_error(path: &str) -> CatalogError {
    CatalogError::HttpStatus {
        url: format!("http://catalog.test{path}"),
        status: 500,
    }
}
