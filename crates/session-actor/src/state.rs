//! # ActorState Trait
//!
//! The contract a value must satisfy to be owned by a [`StateActor`](crate::StateActor).
//!
//! A state actor owns a single value (a counter, a page, a session) instead of a keyed
//! store. Callers never touch the value directly; they send it typed actions and get
//! typed results back. Dependencies arrive through the `Context` associated type, which
//! is handed to `run()` rather than `new()`, so two actors can hold each other's clients.

use async_trait::async_trait;
use std::fmt::Debug;

/// Trait that any value must implement to be owned by a `StateActor`.
///
/// # Async & Context
/// Hooks are `async` so a state can call other actors while handling an action. The
/// `Context` is injected into every hook ("late binding").
///
/// # Error Granularity
/// One error enum per state, not per action. Clients match on a single type.
#[async_trait]
pub trait ActorState: Clone + Send + Sync + 'static {
    /// Enum of the transitions this state accepts.
    type Action: Send + Debug;

    /// The value returned by a handled action.
    type ActionResult: Send + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this state.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Called once when the actor loop starts, before any message is handled.
    async fn on_start(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle one action. The actor publishes the resulting state afterwards.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
