//! # Cart Client
//!
//! High-level API for the cart quantity actor.
use crate::cart_actor::{CartAction, CartError};
use crate::model::CartQuantity;
use async_trait::async_trait;
use session_actor::{ActorClient, FrameworkError, StateClient};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct CartClient {
    inner: StateClient<CartQuantity>,
}

impl CartClient {
    pub fn new(inner: StateClient<CartQuantity>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn set(&self, quantity: u32) -> Result<u32, CartError> {
        self.send(CartAction::Set(quantity)).await
    }

    #[instrument(skip(self))]
    pub async fn increment(&self) -> Result<u32, CartError> {
        self.send(CartAction::Increment).await
    }

    /// Stays at zero when the cart is empty.
    #[instrument(skip(self))]
    pub async fn decrement(&self) -> Result<u32, CartError> {
        self.send(CartAction::Decrement).await
    }

    #[instrument(skip(self))]
    pub async fn add(&self, quantity: u32) -> Result<u32, CartError> {
        self.send(CartAction::Add(quantity)).await
    }

    /// The quantity shown in the header badge.
    pub async fn quantity(&self) -> Result<u32, CartError> {
        self.snapshot().await.map(|cart| cart.quantity)
    }

    async fn send(&self, action: CartAction) -> Result<u32, CartError> {
        debug!("Sending request");
        self.inner.perform_action(action).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<CartQuantity> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &StateClient<CartQuantity> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::StateError(source) => match source.downcast::<CartError>() {
                Ok(error) => *error,
                Err(other) => CartError::ActorCommunicationError(other.to_string()),
            },
            other => CartError::ActorCommunicationError(other.to_string()),
        }
    }
}
