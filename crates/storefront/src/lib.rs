//! # Storefront Session Engine
//!
//! The state and coordination behind a storefront page: a header with search and
//! category navigation, a product grid fetched from a remote catalog, a detail view
//! with a pending quantity, and a session-wide cart badge.
//!
//! ## Components
//!
//! - **[catalog]**: [`CatalogApi`](catalog::CatalogApi) and its HTTP implementation.
//! - **[filter]**: case-insensitive term matching over products and categories.
//! - **[header]** / **[grid]**: the leaf components. They hold state and report
//!   events; they never call each other.
//! - **[cart_actor]** / **[page_actor]**: the two actors of a session. The page actor
//!   is the composition root.
//! - **[clients]**: typed clients for both actors.
//! - **[lifecycle]**: [`StorefrontSystem`](lifecycle::StorefrontSystem) creates, wires,
//!   and stops a session.
//! - **[view]**: [`PageView`](view::PageView), the page as text.
//!
//! ## Testing
//!
//! [`CatalogApi`](catalog::CatalogApi) is the seam for scripted catalogs, and
//! [`session_actor::mock`] stands in for the cart when testing the page alone.

pub mod cart_actor;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod filter;
pub mod grid;
pub mod header;
pub mod lifecycle;
pub mod model;
pub mod page_actor;
pub mod rating;
pub mod view;
