//! # Session Lifecycle
//!
//! Creates, wires, and stops the actors of one storefront session.
//!
//! ## Wiring
//!
//! The page actor needs the cart client and a handle to itself, neither of which
//! exists until the actors are created. So creation and wiring are separate steps:
//!
//! 1. **Create** both actors with `cart_actor::new` and `page_actor::new`. Nothing
//!    runs yet.
//! 2. **Inject** the page's [`PageContext`](crate::page_actor::PageContext) (catalog,
//!    cart client, weak page client) through `run(context)`.
//! 3. **Spawn** each run loop in its own task.
//!
//! ## Shutdown
//!
//! Actors stop when their last strong client is dropped. The page holds a cart client
//! in its context, so the page stops first and the cart follows. Fetch tasks hold only
//! a weak page client and never delay shutdown.

pub mod storefront_system;

pub use storefront_system::*;
