//! # ActorClient Trait
//!
//! Common interface for domain-specific clients, adding a default `snapshot` built on
//! top of a generic [`StateClient`].
use crate::{ActorState, FrameworkError, StateClient};
use async_trait::async_trait;

/// Trait for domain clients to inherit the standard read operation.
///
/// # Example
///
/// ```rust
/// use session_actor::{ActorClient, ActorState, FrameworkError, StateActor, StateClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Volume(u8);
/// #[derive(Debug)]
/// enum VolumeAction { Louder }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("volume: {0}")]
/// struct VolumeError(String);
///
/// impl From<String> for VolumeError {
///     fn from(msg: String) -> Self { VolumeError(msg) }
/// }
///
/// #[async_trait]
/// impl ActorState for Volume {
///     type Action = VolumeAction;
///     type ActionResult = u8;
///     type Context = ();
///     type Error = VolumeError;
///
///     async fn handle_action(&mut self, _: VolumeAction, _: &()) -> Result<u8, VolumeError> {
///         self.0 = self.0.saturating_add(1);
///         Ok(self.0)
///     }
/// }
///
/// struct VolumeKnob(StateClient<Volume>);
///
/// #[async_trait]
/// impl ActorClient<Volume> for VolumeKnob {
///     type Error = VolumeError;
///
///     fn inner(&self) -> &StateClient<Volume> { &self.0 }
///     fn map_error(e: FrameworkError) -> VolumeError { VolumeError(e.to_string()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StateActor::new(4, Volume(3));
///     tokio::spawn(actor.run(()));
///
///     // snapshot() comes with the trait
///     let knob = VolumeKnob(client);
///     assert_eq!(knob.snapshot().await.unwrap().0, 3);
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorState>: Send + Sync {
    /// The domain-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic StateClient.
    fn inner(&self) -> &StateClient<T>;

    /// Map framework errors to the domain error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a copy of the current state.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }
}
