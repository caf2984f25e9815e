//! # Mock Client & Testing Guide
//!
//! `MockClient<T>` hands out a real [`StateClient<T>`] whose requests are answered from
//! a queue of expectations instead of by a running actor. Use it to test code that
//! *talks to* an actor (a domain client, or another actor holding this client in its
//! context) without running the real state.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Determinism** | Fully scripted | Subject to scheduler |
//! | **State** | None (expectations) | Real transitions |
//! | **Error Injection** | Easy (`return_err`) | Requires specific state |
//! | **Use Case** | Logic *around* the client | The state itself, full system |
//!
//! ## Example
//!
//! ```rust
//! use session_actor::mock::MockClient;
//! use session_actor::{ActorState, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug, PartialEq)] struct Counter(u32);
//! #[derive(Debug, PartialEq)] enum CounterAction { Bump }
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct CounterError;
//!
//! #[async_trait]
//! impl ActorState for Counter {
//!     type Action = CounterAction; type ActionResult = u32; type Context = (); type Error = CounterError;
//!     async fn handle_action(&mut self, _: CounterAction, _: &()) -> Result<u32, Self::Error> { Ok(0) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::new(Counter(0));
//!     mock.expect_action().return_ok(7);
//!     mock.expect_snapshot().return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.perform_action(CounterAction::Bump).await.unwrap(), 7);
//!     assert!(matches!(client.snapshot().await, Err(FrameworkError::ActorClosed)));
//!
//!     mock.verify();
//!     assert_eq!(mock.take_actions(), vec![CounterAction::Bump]);
//! }
//! ```
//!
//! ## Low-level Helpers
//!
//! [`create_mock_client`] returns a client and the raw request receiver; pair it with
//! [`expect_action`] or [`expect_snapshot`] to inspect requests and answer them by hand.

use crate::client::StateClient;
use crate::error::FrameworkError;
use crate::message::StateRequest;
use crate::state::ActorState;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot, watch};

enum Expectation<T: ActorState> {
    Snapshot {
        response: Result<T, FrameworkError>,
    },
    Action {
        response: Result<T::ActionResult, FrameworkError>,
    },
}

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in order. A request that does not match the next
/// expectation panics the background task, which surfaces as `ActorDropped` on the
/// caller and as a failed [`verify`](Self::verify).
pub struct MockClient<T: ActorState> {
    client: StateClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    received: Arc<Mutex<Vec<T::Action>>>,
    _handle: tokio::task::JoinHandle<()>,
    _publisher: watch::Sender<T>,
}

impl<T: ActorState> MockClient<T> {
    /// Creates a mock with no expectations. `initial` is what subscribers observe.
    pub fn new(initial: T) -> Self {
        let (sender, mut receiver) = mpsc::channel::<StateRequest<T>>(100);
        let (publisher, watcher) = watch::channel(initial);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let received = Arc::new(Mutex::new(Vec::new()));
        let expectations_clone = expectations.clone();
        let received_clone = received.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        StateRequest::Snapshot { respond_to },
                        Some(Expectation::Snapshot { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StateRequest::Action { action, respond_to },
                        Some(Expectation::Action { response }),
                    ) => {
                        received_clone.lock().unwrap().push(action);
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StateClient::new(sender, watcher),
            expectations,
            received,
            _handle: handle,
            _publisher: publisher,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StateClient<T> {
        self.client.clone()
    }

    /// Expects a `snapshot` request.
    pub fn expect_snapshot(&mut self) -> SnapshotExpectationBuilder<T> {
        SnapshotExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `perform_action` request.
    pub fn expect_action(&mut self) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Drains the actions received so far, in arrival order.
    pub fn take_actions(&self) -> Vec<T::Action> {
        std::mem::take(&mut *self.received.lock().unwrap())
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `snapshot` expectations.
pub struct SnapshotExpectationBuilder<T: ActorState> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorState> SnapshotExpectationBuilder<T> {
    pub fn return_ok(self, state: T) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Snapshot { response: Ok(state) });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Snapshot {
                response: Err(error),
            });
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<T: ActorState> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorState> ActionExpectationBuilder<T> {
    pub fn return_ok(self, result: T::ActionResult) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Action {
                response: Ok(result),
            });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Action {
                response: Err(error),
            });
    }
}

/// Creates a client and the receiver its requests arrive on.
///
/// Nothing answers the requests: the test reads them with [`expect_action`] or
/// [`expect_snapshot`] and responds through the returned sender.
pub fn create_mock_client<T: ActorState>(
    buffer_size: usize,
    initial: T,
) -> (StateClient<T>, mpsc::Receiver<StateRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (_publisher, watcher) = watch::channel(initial);
    (StateClient::new(sender, watcher), receiver)
}

/// Helper to verify that the next message is an Action request.
pub async fn expect_action<T: ActorState>(
    receiver: &mut mpsc::Receiver<StateRequest<T>>,
) -> Option<(
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(StateRequest::Action { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Snapshot request.
pub async fn expect_snapshot<T: ActorState>(
    receiver: &mut mpsc::Receiver<StateRequest<T>>,
) -> Option<oneshot::Sender<Result<T, FrameworkError>>> {
    match receiver.recv().await {
        Some(StateRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Tally {
        total: u32,
    }

    #[derive(Debug, PartialEq)]
    enum TallyAction {
        Add(u32),
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Tally error")]
    struct TallyError;

    #[async_trait]
    impl ActorState for Tally {
        type Action = TallyAction;
        type ActionResult = u32;
        type Context = ();
        type Error = TallyError;

        async fn handle_action(
            &mut self,
            action: TallyAction,
            _ctx: &Self::Context,
        ) -> Result<u32, Self::Error> {
            let TallyAction::Add(n) = action;
            self.total += n;
            Ok(self.total)
        }
    }

    #[tokio::test]
    async fn test_raw_mock_client() {
        let (client, mut receiver) = create_mock_client(10, Tally { total: 0 });

        let add_task = tokio::spawn(async move { client.perform_action(TallyAction::Add(4)).await });

        let (action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(action, TallyAction::Add(4));
        responder.send(Ok(4)).unwrap();

        let result = add_task.await.unwrap();
        assert!(matches!(result, Ok(4)));
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::new(Tally { total: 0 });
        mock.expect_action().return_ok(3);
        mock.expect_snapshot().return_ok(Tally { total: 3 });

        let client = mock.client();
        assert_eq!(client.perform_action(TallyAction::Add(3)).await.unwrap(), 3);
        assert_eq!(client.snapshot().await.unwrap(), Tally { total: 3 });

        mock.verify();
        assert_eq!(mock.take_actions(), vec![TallyAction::Add(3)]);
        assert!(mock.take_actions().is_empty());
    }

    #[tokio::test]
    async fn test_mock_client_injects_errors() {
        let mut mock = MockClient::new(Tally { total: 0 });
        mock.expect_action().return_err(FrameworkError::ActorClosed);

        let result = mock.client().perform_action(TallyAction::Add(1)).await;
        assert!(matches!(result, Err(FrameworkError::ActorClosed)));
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn test_verify_reports_unmet_expectations() {
        let mut mock = MockClient::new(Tally { total: 0 });
        mock.expect_snapshot().return_ok(Tally { total: 0 });
        mock.verify();
    }
}
