/// A product as served by the catalog API.
///
/// Products are immutable once fetched. The page replaces its whole collection on
/// every applied fetch rather than editing entries in place.
use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// Average review score (0–5) and number of reviews.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub image: String,
    pub rating: Rating,
}

impl Product {
    /// Creates a product with no image, description, or reviews.
    pub fn new(
        id: u32,
        title: impl Into<String>,
        price: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: ProductId(id),
            title: title.into(),
            price,
            description: String::new(),
            category: category.into(),
            image: String::new(),
            rating: Rating::default(),
        }
    }

    pub fn with_rating(mut self, rate: f64, count: u32) -> Self {
        self.rating = Rating { rate, count };
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Checks the field ranges JSON decoding alone cannot express.
    pub fn validate(&self) -> Result<(), String> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(format!("{}: invalid price {}", self.id, self.price));
        }
        if !(0.0..=5.0).contains(&self.rating.rate) {
            return Err(format!("{}: rating {} outside 0-5", self.id, self.rating.rate));
        }
        Ok(())
    }
}
