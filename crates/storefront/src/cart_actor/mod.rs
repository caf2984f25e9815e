//! # Cart Actor
//!
//! The session's cart quantity, owned by its own actor.
//!
//! The quantity is injected state: whoever builds the session creates this actor and
//! hands [`CartClient`](crate::clients::CartClient)s to the parts that need it (the
//! page actor for modal commits, the view for the header badge).
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorState`](session_actor::ActorState) for
//!   [`CartQuantity`](crate::model::CartQuantity)
//! - [`actions`] - [`CartAction`]
//! - [`error`] - [`CartError`]
//!
//! ## Usage
//!
//! ```rust
//! use storefront::cart_actor;
//! use storefront::clients::CartClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = cart_actor::new(0);
//!     let cart = CartClient::new(generic_client);
//!     tokio::spawn(actor.run(()));
//!
//!     cart.increment().await?;
//!     assert_eq!(cart.add(2).await?, 3);
//!     assert_eq!(cart.quantity().await?, 3);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::CartQuantity;
use session_actor::{StateActor, StateClient};

/// Creates a new cart actor starting at `initial` and its client.
pub fn new(initial: u32) -> (StateActor<CartQuantity>, StateClient<CartQuantity>) {
    StateActor::new(32, CartQuantity::new(initial))
}
