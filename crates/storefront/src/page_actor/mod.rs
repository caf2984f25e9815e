//! # Page Actor
//!
//! The composition root of a storefront session. One actor receives every UI event,
//! routes it to the header or the grid, and does the coordination none of them may do
//! on their own: issuing catalog fetches, dropping stale responses, re-applying the
//! search term, and committing the detail view's quantity to the cart.
//!
//! ## Context
//!
//! The page depends on the catalog, the cart actor, and on itself (fetch tasks post
//! their results back). All three arrive through [`PageContext`] at `run` time; the
//! self-reference is a [`WeakStateClient`](session_actor::WeakStateClient) so the page
//! still shuts down once its external clients are gone.
//!
//! ## Last Issued Wins
//!
//! Superseded fetches are not cancelled. Each one carries the generation it was issued
//! under and [`PageAction::CatalogLoaded`] is ignored unless that generation is still
//! the latest.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::*;
pub use error::*;

use session_actor::{StateActor, StateClient};

/// Creates a new page actor and its client. Nothing is fetched until it runs.
pub fn new() -> (StateActor<Page>, StateClient<Page>) {
    StateActor::new(64, Page::new())
}
