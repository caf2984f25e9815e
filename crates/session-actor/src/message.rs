//! # Generic Messages
//!
//! The request type carried from a [`StateClient`](crate::StateClient) to its
//! [`StateActor`](crate::StateActor).

use crate::error::FrameworkError;
use crate::state::ActorState;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor.
///
/// A state actor owns exactly one value, so there are only two things a caller can do
/// with it: read a copy (`Snapshot`) or ask the state to handle one of its
/// [`ActorState::Action`]s (`Action`). Every mutation goes through `Action`, which is
/// what makes transitions atomic: the actor handles one message at a time.
#[derive(Debug)]
pub enum StateRequest<T: ActorState> {
    Snapshot {
        respond_to: Response<T>,
    },
    Action {
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
