//! # Domain Clients
//!
//! Typed wrappers over the generic [`StateClient`](session_actor::StateClient)s of the
//! cart and page actors. Callers get `Result<u32, CartError>` or
//! `Result<(), PageError>` instead of matching on action result enums.

pub mod cart_client;
pub mod page_client;

pub use cart_client::*;
pub use page_client::*;
