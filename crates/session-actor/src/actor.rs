//! # Generic State Actor
//!
//! `StateActor` is the server half of the runtime. It owns one value of type `T`,
//! handles `StateRequest`s sequentially, and publishes the value on a watch channel
//! after every action so observers see each transition.

use crate::client::StateClient;
use crate::error::FrameworkError;
use crate::message::StateRequest;
use crate::state::ActorState;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

/// The generic actor that owns a single state value.
///
/// **Concurrency Model**:
/// The actor runs in its own Tokio task and handles one message at a time, so the
/// state needs no `Mutex`. A transition can never observe another transition half done.
///
/// # Usage Pattern
///
/// 1.  **Create**: `StateActor::new(buffer, initial)` returns the actor and its client.
/// 2.  **Wire**: pass dependencies into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use session_actor::{ActorState, StateActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Counter(u32);
/// #[derive(Debug)] enum CounterAction { Bump }
/// #[derive(Debug, thiserror::Error)] #[error("counter error")] struct CounterError;
///
/// #[async_trait]
/// impl ActorState for Counter {
///     type Action = CounterAction;
///     type ActionResult = u32;
///     type Context = ();
///     type Error = CounterError;
///
///     async fn handle_action(&mut self, _: CounterAction, _: &()) -> Result<u32, Self::Error> {
///         self.0 += 1;
///         Ok(self.0)
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StateActor::new(10, Counter(0));
///     tokio::spawn(actor.run(()));
///
///     assert_eq!(client.perform_action(CounterAction::Bump).await.unwrap(), 1);
///     assert_eq!(client.snapshot().await.unwrap().0, 1);
/// }
/// ```
pub struct StateActor<T: ActorState> {
    receiver: mpsc::Receiver<StateRequest<T>>,
    publisher: watch::Sender<T>,
    state: T,
}

impl<T: ActorState> StateActor<T> {
    /// Creates a new `StateActor` holding `initial` and its associated `StateClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; when it is full, client
    /// calls wait for space.
    pub fn new(buffer_size: usize, initial: T) -> (Self, StateClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (publisher, watcher) = watch::channel(initial.clone());
        let actor = Self {
            receiver,
            publisher,
            state: initial,
        };
        (actor, StateClient::new(sender, watcher))
    }

    /// Runs the actor's event loop until every strong client has been dropped.
    ///
    /// # Context Injection
    /// `context` is handed to every hook. It can hold clients of actors created after
    /// this one, including a weak client of this very actor.
    pub async fn run(mut self, context: T::Context) {
        // "CartQuantity" rather than "storefront::model::cart::CartQuantity"
        let state_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(state_type, "Actor started");

        if let Err(e) = self.state.on_start(&context).await {
            warn!(state_type, error = %e, "on_start failed");
        }
        self.publish();

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StateRequest::Snapshot { respond_to } => {
                    debug!(state_type, "Snapshot");
                    let _ = respond_to.send(Ok(self.state.clone()));
                }
                StateRequest::Action { action, respond_to } => {
                    debug!(state_type, ?action, "Action");
                    let result = self
                        .state
                        .handle_action(action, &context)
                        .await
                        .map_err(|e| FrameworkError::StateError(Box::new(e)));
                    match &result {
                        Ok(outcome) => debug!(state_type, ?outcome, "Action ok"),
                        Err(e) => warn!(state_type, error = %e, "Action failed"),
                    }
                    // A failed action may still have moved the state.
                    self.publish();
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(state_type, "Shutdown");
    }

    fn publish(&self) {
        self.publisher.send_replace(self.state.clone());
    }
}
