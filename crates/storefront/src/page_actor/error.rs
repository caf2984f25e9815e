//! Error types for the page actor.

use crate::cart_actor::CartError;
use crate::grid::ModalError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PageError {
    #[error(transparent)]
    Modal(#[from] ModalError),

    /// Committing the pending quantity failed; the detail view stays open.
    #[error("Cart update failed: {0}")]
    Cart(#[from] CartError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for PageError {
    fn from(msg: String) -> Self {
        PageError::ActorCommunicationError(msg)
    }
}
