//! # Product Grid / Modal Presenter
//!
//! Holds the last applied catalog fetch, the subset matching the search term, the load
//! status, and the detail modal with its pending quantity.
//!
//! Closing the modal commits exactly the pending quantity to the cart, once. Opening it
//! commits nothing.

use crate::catalog::CatalogError;
use crate::filter::filter_products;
use crate::model::{Product, ProductId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed { message: String },
}

impl LoadStatus {
    pub fn is_settled(&self) -> bool {
        !matches!(self, LoadStatus::Loading)
    }
}

/// Errors from modal interactions.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModalError {
    #[error("A detail view is already open for {0}")]
    AlreadyOpen(ProductId),

    #[error("Product is not in the visible grid: {0}")]
    NotVisible(ProductId),

    #[error("No detail view is open")]
    NotOpen,
}

/// The open detail view: which product, and how many the shopper wants.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub product: Product,
    /// Never below 1.
    pub pending: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductGrid {
    products: Vec<Product>,
    visible: Vec<Product>,
    status: LoadStatus,
    selection: Option<Selection>,
}

impl Default for ProductGrid {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            visible: Vec::new(),
            status: LoadStatus::Loading,
            selection: None,
        }
    }
}

impl ProductGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_loading(&mut self) {
        self.status = LoadStatus::Loading;
    }

    /// Applies a finished fetch.
    ///
    /// On success the collection is replaced and re-filtered by `term`. On failure the
    /// previous collection is kept (hidden behind the error) so the visible set stays a
    /// subset of the last successful fetch.
    pub fn apply_fetch(&mut self, result: Result<Vec<Product>, CatalogError>, term: &str) {
        match result {
            Ok(products) => {
                self.products = products;
                self.visible = filter_products(&self.products, term);
                self.status = LoadStatus::Ready;
            }
            Err(error) => {
                self.status = LoadStatus::Failed {
                    message: error.to_string(),
                };
            }
        }
    }

    pub fn apply_filter(&mut self, term: &str) {
        self.visible = filter_products(&self.products, term);
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn visible(&self) -> &[Product] {
        &self.visible
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// "Add to cart" on a card: opens the detail view with a pending quantity of 1.
    pub fn open(&mut self, id: ProductId) -> Result<&Selection, ModalError> {
        if let Some(open) = &self.selection {
            return Err(ModalError::AlreadyOpen(open.product.id));
        }
        if self.status != LoadStatus::Ready {
            return Err(ModalError::NotVisible(id));
        }
        let product = self
            .visible
            .iter()
            .find(|product| product.id == id)
            .cloned()
            .ok_or(ModalError::NotVisible(id))?;
        Ok(&*self.selection.insert(Selection { product, pending: 1 }))
    }

    pub fn increment_pending(&mut self) -> Result<u32, ModalError> {
        let selection = self.selection.as_mut().ok_or(ModalError::NotOpen)?;
        selection.pending = selection.pending.saturating_add(1);
        Ok(selection.pending)
    }

    pub fn decrement_pending(&mut self) -> Result<u32, ModalError> {
        let selection = self.selection.as_mut().ok_or(ModalError::NotOpen)?;
        selection.pending = selection.pending.saturating_sub(1).max(1);
        Ok(selection.pending)
    }

    /// The quantity closing the modal would commit.
    pub fn pending(&self) -> Result<u32, ModalError> {
        self.selection
            .as_ref()
            .map(|selection| selection.pending)
            .ok_or(ModalError::NotOpen)
    }

    /// Closes the detail view and returns the quantity to commit.
    pub fn close(&mut self) -> Result<u32, ModalError> {
        self.selection
            .take()
            .map(|selection| selection.pending)
            .ok_or(ModalError::NotOpen)
    }
}
