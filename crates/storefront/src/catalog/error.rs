//! Error types for the catalog client.

use std::time::Duration;
use thiserror::Error;

/// Every way a catalog request can fail.
///
/// The `Display` text is what the page shows above its "Try Again" control.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// No complete response within the configured bound.
    #[error("Request timed out after {after:?}")]
    Timeout { url: String, after: Duration },

    /// The server answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    HttpStatus { url: String, status: u16 },

    /// The body was not a JSON array of well-formed entries.
    #[error("Invalid data format received: {reason}")]
    MalformedResponse { url: String, reason: String },

    /// The request never produced a response (DNS, connection refused, TLS).
    #[error("Network error: {message}")]
    Transport { url: String, message: String },
}

impl CatalogError {
    pub fn url(&self) -> &str {
        match self {
            CatalogError::Timeout { url, .. }
            | CatalogError::HttpStatus { url, .. }
            | CatalogError::MalformedResponse { url, .. }
            | CatalogError::Transport { url, .. } => url,
        }
    }
}
