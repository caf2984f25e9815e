//! Session configuration.
//!
//! Only the catalog origin can come from the environment (`STOREFRONT_API_URL`);
//! everything else is set in code.

use reqwest::Url;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "https://fakestoreapi.com";
pub const API_BASE_URL_ENV: &str = "STOREFRONT_API_URL";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid catalog base URL {value:?}: {reason}")]
    InvalidBaseUrl { value: String, reason: String },
}

#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Origin of the catalog API; endpoints are appended as path segments.
    pub api_base_url: Url,
    /// Per-request bound, covering connect and body.
    pub request_timeout: Duration,
    pub initial_cart_quantity: u32,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_base_url: Url::parse(DEFAULT_API_BASE_URL).expect("default base URL is valid"),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            initial_cart_quantity: 0,
        }
    }
}

impl StorefrontConfig {
    /// Defaults, with the base URL taken from `STOREFRONT_API_URL` when set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        match lookup(API_BASE_URL_ENV) {
            Some(value) if !value.trim().is_empty() => Self::default().with_base_url(value.trim()),
            _ => Ok(Self::default()),
        }
    }

    pub fn with_base_url(mut self, value: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            value: value.to_string(),
            reason,
        };
        let url = Url::parse(value).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(invalid("expected an http(s) origin".to_string()));
        }
        self.api_base_url = url;
        Ok(self)
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_initial_cart_quantity(mut self, quantity: u32) -> Self {
        self.initial_cart_quantity = quantity;
        self
    }
}
