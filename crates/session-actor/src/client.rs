//! # Generic Client
//!
//! The sending half of a state actor, plus a weak variant for callbacks that must not
//! keep the actor alive.

use crate::error::FrameworkError;
use crate::message::StateRequest;
use crate::state::ActorState;
use tokio::sync::{mpsc, oneshot, watch};

/// A type-safe client for interacting with a `StateActor`.
///
/// * **Cloneable** – holds a sender and a watch receiver, so cloning is inexpensive.
/// * **Async API** – requests resolve to `Result<…, FrameworkError>`.
/// * **Observable** – [`subscribe`](Self::subscribe) and [`wait_for`](Self::wait_for)
///   follow the state the actor publishes after every handled action.
pub struct StateClient<T: ActorState> {
    sender: mpsc::Sender<StateRequest<T>>,
    watcher: watch::Receiver<T>,
}

impl<T: ActorState> Clone for StateClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            watcher: self.watcher.clone(),
        }
    }
}

impl<T: ActorState> StateClient<T> {
    pub fn new(sender: mpsc::Sender<StateRequest<T>>, watcher: watch::Receiver<T>) -> Self {
        Self { sender, watcher }
    }

    /// Returns a copy of the state as the actor currently holds it.
    pub async fn snapshot(&self) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StateRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn perform_action(&self, action: T::Action) -> Result<T::ActionResult, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StateRequest::Action { action, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// A receiver of every state the actor publishes.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.watcher.clone()
    }

    /// Waits until the published state satisfies `predicate` and returns a copy of it.
    ///
    /// The current state is checked first, so this returns immediately if it already
    /// matches.
    pub async fn wait_for(
        &self,
        mut predicate: impl FnMut(&T) -> bool + Send,
    ) -> Result<T, FrameworkError> {
        let mut watcher = self.watcher.clone();
        let state = {
            let current = watcher
                .wait_for(|state| predicate(state))
                .await
                .map_err(|_| FrameworkError::ActorClosed)?;
            current.clone()
        };
        Ok(state)
    }

    /// A handle that does not keep the actor's channel open.
    pub fn downgrade(&self) -> WeakStateClient<T> {
        WeakStateClient {
            sender: self.sender.downgrade(),
            watcher: self.watcher.clone(),
        }
    }
}

/// A client that does not count towards the actor's lifetime.
///
/// Actors shut down when every `StateClient` is dropped. Background work spawned by
/// an actor that needs to report back to it holds one of these instead, so it cannot
/// keep its own actor running forever.
pub struct WeakStateClient<T: ActorState> {
    sender: mpsc::WeakSender<StateRequest<T>>,
    watcher: watch::Receiver<T>,
}

impl<T: ActorState> Clone for WeakStateClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            watcher: self.watcher.clone(),
        }
    }
}

impl<T: ActorState> WeakStateClient<T> {
    /// Returns a full client if the actor still has at least one live client.
    pub fn upgrade(&self) -> Option<StateClient<T>> {
        self.sender
            .upgrade()
            .map(|sender| StateClient::new(sender, self.watcher.clone()))
    }
}
