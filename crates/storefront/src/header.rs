//! # Header Controller
//!
//! Owns the search box, the cached category list, and the open/closed state of the
//! header's dropdowns. It never talks to the catalog or the cart: it returns
//! [`HeaderEvent`]s and the page decides what they mean.

use crate::filter::filter_categories;

/// Label of the picker entry that clears the category.
pub const ALL_PRODUCTS: &str = "All Products";

/// What the header reports upward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderEvent {
    /// The search text changed.
    Search(String),
    /// A category was picked; `None` is "All Products".
    CategorySelected(Option<String>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderController {
    search_text: String,
    categories: Vec<String>,
    suggestions_open: bool,
    menu_open: bool,
    search_panel_open: bool,
    category_picker_open: bool,
}

impl HeaderController {
    pub fn new() -> Self {
        Self::default()
    }

    /// A keystroke in the search box.
    ///
    /// Suggestions open while there is text to match against.
    pub fn type_search(&mut self, term: impl Into<String>) -> HeaderEvent {
        self.search_text = term.into();
        self.suggestions_open = !self.search_text.is_empty();
        HeaderEvent::Search(self.search_text.clone())
    }

    /// A pick from the suggestion list or the category picker.
    ///
    /// The search text follows the pick (the label, or empty for "All Products") and
    /// is reported as a `Search` after the selection so the page's term always equals
    /// what the box shows.
    pub fn select_category(&mut self, category: Option<String>) -> Vec<HeaderEvent> {
        self.search_text = category.clone().unwrap_or_default();
        self.suggestions_open = false;
        self.category_picker_open = false;
        vec![
            HeaderEvent::CategorySelected(category),
            HeaderEvent::Search(self.search_text.clone()),
        ]
    }

    pub fn set_categories(&mut self, categories: Vec<String>) {
        self.categories = categories;
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Cached categories matching the current search text.
    pub fn suggestions(&self) -> Vec<String> {
        filter_categories(&self.categories, &self.search_text)
    }

    /// The suggestion dropdown as rendered: empty while it is closed.
    pub fn visible_suggestions(&self) -> Vec<String> {
        if self.suggestions_open {
            self.suggestions()
        } else {
            Vec::new()
        }
    }

    /// Entries of the category picker, "All Products" first.
    pub fn picker_entries(&self) -> Vec<String> {
        std::iter::once(ALL_PRODUCTS.to_string())
            .chain(self.categories.iter().cloned())
            .collect()
    }

    // Presentational state only; none of these emit events.

    pub fn focus_search(&mut self) {
        self.suggestions_open = true;
    }

    pub fn blur_search(&mut self) {
        self.suggestions_open = false;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn toggle_search_panel(&mut self) {
        self.search_panel_open = !self.search_panel_open;
    }

    /// Opening the picker from the mobile menu also closes the menu.
    pub fn open_category_picker(&mut self) {
        self.category_picker_open = true;
        self.menu_open = false;
    }

    pub fn close_category_picker(&mut self) {
        self.category_picker_open = false;
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_search_panel_open(&self) -> bool {
        self.search_panel_open
    }

    pub fn is_category_picker_open(&self) -> bool {
        self.category_picker_open
    }

    pub fn are_suggestions_open(&self) -> bool {
        self.suggestions_open
    }
}
