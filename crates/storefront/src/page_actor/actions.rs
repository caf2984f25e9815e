//! Events the page actor accepts, and what they answer.

use crate::catalog::CatalogError;
use crate::model::{Product, ProductId};

/// Every UI event on the page, plus the completions of its own background fetches.
#[derive(Debug, Clone)]
pub enum PageAction {
    /// A keystroke in the search box.
    Search(String),
    /// A pick from the suggestions or the category picker; `None` is "All Products".
    SelectCategory(Option<String>),
    /// "Try Again" after a failed load. Re-fetches the current category.
    Retry,
    /// "Add to cart" on a card.
    OpenProduct(ProductId),
    IncrementPending,
    DecrementPending,
    /// Closes the detail view and commits its pending quantity to the cart.
    CloseModal,
    ToggleMenu,
    ToggleSearchPanel,
    OpenCategoryPicker,
    CloseCategoryPicker,
    FocusSearch,
    BlurSearch,
    /// A catalog fetch finished. Ignored unless `generation` is the latest issued.
    CatalogLoaded {
        generation: u64,
        result: Result<Vec<Product>, CatalogError>,
    },
    CategoriesLoaded(Result<Vec<String>, CatalogError>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageActionResult {
    Updated,
    /// A new catalog fetch is in flight with this generation.
    FetchIssued(u64),
    /// Whether a finished fetch was applied (`false` if it was stale).
    Applied(bool),
    PendingQuantity(u32),
    Committed { added: u32, cart_quantity: u32 },
}
