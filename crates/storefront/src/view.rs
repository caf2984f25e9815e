//! # Page View
//!
//! A render-ready snapshot of the storefront page. [`PageView::build`] decides what is
//! shown; its `Display` impl draws it as plain text, top to bottom: header, hero,
//! discovery, grid, features, footer, and the detail view if one is open.

use crate::grid::{LoadStatus, Selection};
use crate::header::{HeaderController, ALL_PRODUCTS};
use crate::model::{Product, ProductId};
use crate::page_actor::Page;
use crate::rating::{format_price, StarRating};
use std::fmt;

pub const LOGO: &str = "Harmoni";
pub const NAV_LINKS: [&str; 4] = ["Home Page", "Categories", "Contact Us", "More Options"];
pub const SEARCH_PLACEHOLDER: &str = "What are you looking for?";
pub const LOADING_MESSAGE: &str = "Loading products...";
pub const RETRY_LABEL: &str = "Try Again";

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderView {
    pub logo: &'static str,
    pub nav_links: Vec<&'static str>,
    pub search_text: String,
    /// Empty while the dropdown is closed.
    pub suggestions: Vec<String>,
    /// `Some` while the category picker is open, "All Products" first.
    pub picker: Option<Vec<String>>,
    pub menu_open: bool,
    pub search_panel_open: bool,
    pub cart_badge: u32,
}

impl HeaderView {
    fn build(header: &HeaderController, cart_badge: u32) -> Self {
        Self {
            logo: LOGO,
            nav_links: NAV_LINKS.to_vec(),
            search_text: header.search_text().to_string(),
            suggestions: header.visible_suggestions(),
            picker: header
                .is_category_picker_open()
                .then(|| header.picker_entries()),
            menu_open: header.is_menu_open(),
            search_panel_open: header.is_search_panel_open(),
            cart_badge,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub id: ProductId,
    pub title: String,
    pub image: String,
    /// Already formatted, e.g. `$9.50`.
    pub price: String,
    pub stars: StarRating,
    pub review_count: u32,
}

impl From<&Product> for CardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            image: product.image.clone(),
            price: format_price(product.price),
            stars: StarRating::from_score(product.rating.rate),
            review_count: product.rating.count,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GridBody {
    Loading,
    /// The error message, shown with a retry control.
    Failed(String),
    Cards(Vec<CardView>),
}

/// The open detail view.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalView {
    pub card: CardView,
    pub category: String,
    pub description: String,
    pub pending: u32,
}

impl From<&Selection> for ModalView {
    fn from(selection: &Selection) -> Self {
        Self {
            card: CardView::from(&selection.product),
            category: selection.product.category.clone(),
            description: selection.product.description.clone(),
            pending: selection.pending,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub header: HeaderView,
    /// Hero, discovery, and features sections; hidden while searching.
    pub show_marketing: bool,
    /// The selected category or "All Products".
    pub heading: String,
    pub body: GridBody,
    pub modal: Option<ModalView>,
}

impl PageView {
    pub fn build(page: &Page, cart_quantity: u32) -> Self {
        let grid = page.grid();
        let body = match grid.status() {
            LoadStatus::Loading => GridBody::Loading,
            LoadStatus::Failed { message } => GridBody::Failed(message.clone()),
            LoadStatus::Ready => GridBody::Cards(grid.visible().iter().map(CardView::from).collect()),
        };
        Self {
            header: HeaderView::build(page.header(), cart_quantity),
            show_marketing: !page.is_searching(),
            heading: page
                .criteria()
                .category
                .clone()
                .unwrap_or_else(|| ALL_PRODUCTS.to_string()),
            body,
            modal: grid.selection().map(ModalView::from),
        }
    }
}

impl fmt::Display for PageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header)?;
        if self.show_marketing {
            writeln!(f)?;
            writeln!(f, "Welcome to My Store")?;
            writeln!(f, "Your Shopping Destination")?;
            writeln!(
                f,
                "Discover a wide range of products tailored just for you. Shop with ease and find exactly what you need."
            )?;
            writeln!(f)?;
            writeln!(f, "Discover Your Next Favorite Item")?;
            writeln!(
                f,
                "Browse our exclusive collection and find the perfect product tailored just for you."
            )?;
            writeln!(f, "[Shop] [Learn More]")?;
        }

        writeln!(f)?;
        writeln!(f, "{}", self.heading.to_uppercase())?;
        match &self.body {
            GridBody::Loading => writeln!(f, "{LOADING_MESSAGE}")?,
            GridBody::Failed(message) => {
                writeln!(f, "Error: {message}")?;
                writeln!(f, "[{RETRY_LABEL}]")?;
            }
            GridBody::Cards(cards) => {
                writeln!(f, "Explore Our Products")?;
                for card in cards {
                    writeln!(f, "{card}")?;
                }
            }
        }

        if self.show_marketing {
            writeln!(f)?;
            writeln!(f, "FREE AND FAST DELIVERY - Free delivery for all orders over $140")?;
            writeln!(f, "24/7 CUSTOMER SERVICE - Friendly 24/7 customer support")?;
            writeln!(f, "MONEY BACK GUARANTEE - We return money within 30 days")?;
        }

        writeln!(f)?;
        writeln!(f, "Exclusive | Support | Account | Quick Link")?;
        writeln!(f, "© Copyright Harmoni 2025. All rights reserved.")?;

        if let Some(modal) = &self.modal {
            writeln!(f)?;
            write!(f, "{modal}")?;
        }
        Ok(())
    }
}

impl fmt::Display for HeaderView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let search = if self.search_text.is_empty() {
            SEARCH_PLACEHOLDER
        } else {
            &self.search_text
        };
        writeln!(
            f,
            "{} | {} | [{}] | Cart ({})",
            self.logo,
            self.nav_links.join(" · "),
            search,
            self.cart_badge
        )?;
        for suggestion in &self.suggestions {
            writeln!(f, "  > {suggestion}")?;
        }
        if let Some(entries) = &self.picker {
            writeln!(f, "Categories:")?;
            if entries.len() == 1 {
                writeln!(f, "  No categories found.")?;
            }
            for entry in entries {
                writeln!(f, "  - {entry}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for CardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} {} ({}) [Add To Cart]",
            self.id.0, self.title, self.price, self.stars, self.review_count
        )
    }
}

impl fmt::Display for ModalView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.card.title)?;
        writeln!(
            f,
            "{} ({} Reviews) In Stock",
            self.card.stars, self.card.review_count
        )?;
        writeln!(f, "{}", self.card.price)?;
        if !self.description.is_empty() {
            writeln!(f, "{}", self.description)?;
        }
        writeln!(f, "Category: {}", self.category)?;
        writeln!(f, "[-] {} [+] [Buy Now]", self.pending)
    }
}
