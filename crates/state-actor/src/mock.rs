//! # Mock Framework & Testing Guide
//!
//! `MockClient<S>` hands out a real [`StateClient<S>`] whose requests are
//! answered from a queue of expectations instead of a running actor. Use it to
//! test code that sits *around* a client (presenters, orchestration) without a
//! real state behind it.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **State** | No real state (expectations) | Real state management |
//! | **Use Case** | Logic around the client | The state itself or the full system |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Testing Strategies
//!
//! 1. **Client logic (pure mock)**: [`MockClient`] with `expect_action` /
//!    `expect_snapshot`, then `verify()`.
//! 2. **Single actor**: spawn a real [`StateActor`](crate::StateActor) and drive it
//!    through its client. With `#[tokio::test(start_paused = true)]` deadlines
//!    can be stepped with `tokio::time::advance`.
//! 3. **Full system**: start the domain's lifecycle type and run a scripted
//!    session end to end.
//!
//! ## Failure Injection
//!
//! ```rust
//! use state_actor::mock::MockClient;
//! use state_actor::{ActorState, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Debug)] struct Lamp;
//! #[derive(Debug)] enum LampAction { Toggle }
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct LampError;
//!
//! #[async_trait]
//! impl ActorState for Lamp {
//!     type Action = LampAction; type ActionResult = bool; type Snapshot = bool;
//!     type Context = (); type Error = LampError;
//!     fn snapshot(&self) -> bool { false }
//!     async fn handle_action(&mut self, _: LampAction, _: &()) -> Result<bool, LampError> { Ok(true) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Lamp>::new();
//!     let client = mock.client();
//!
//!     mock.expect_action().return_err(FrameworkError::ActorClosed);
//!
//!     let result = client.perform_action(LampAction::Toggle).await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! ## Mocking Utilities
//!
//! Use [`create_mock_client`] to get a client and the raw receiver, or the
//! fluent [`MockClient`] API.

use crate::client::StateClient;
use crate::error::FrameworkError;
use crate::message::StateRequest;
use crate::state::ActorState;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot, watch};

/// An expected request and the canned response for it.
enum Expectation<S: ActorState> {
    Action {
        response: Result<S::ActionResult, FrameworkError>,
    },
    Snapshot {
        response: Result<S::Snapshot, FrameworkError>,
    },
}

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in the order they were registered. A request
/// that does not match the next expectation panics the mock task, which
/// surfaces as `ActorDropped` on the caller's side.
pub struct MockClient<S: ActorState> {
    client: StateClient<S>,
    expectations: Arc<Mutex<VecDeque<Expectation<S>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<S: ActorState> Default for MockClient<S>
where
    S::Snapshot: Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ActorState> MockClient<S>
where
    S::Snapshot: Default,
{
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StateRequest<S>>(100);
        let (_publisher, updates) = watch::channel(S::Snapshot::default());
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        StateRequest::Action {
                            action: _,
                            respond_to,
                        },
                        Some(Expectation::Action { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (StateRequest::Snapshot { respond_to }, Some(Expectation::Snapshot { response })) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StateClient::new(sender, updates),
            expectations,
            _handle: handle,
        }
    }
}

impl<S: ActorState> MockClient<S> {
    /// Returns the client for use in tests.
    pub fn client(&self) -> StateClient<S> {
        self.client.clone()
    }

    /// Expects a `perform_action` call.
    pub fn expect_action(&mut self) -> ActionExpectationBuilder<S> {
        ActionExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `snapshot` call.
    pub fn expect_snapshot(&mut self) -> SnapshotExpectationBuilder<S> {
        SnapshotExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `perform_action` expectations.
pub struct ActionExpectationBuilder<S: ActorState> {
    expectations: Arc<Mutex<VecDeque<Expectation<S>>>>,
}

impl<S: ActorState> ActionExpectationBuilder<S> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, result: S::ActionResult) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Action {
                response: Ok(result),
            });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Action {
                response: Err(error),
            });
    }
}

/// Builder for `snapshot` expectations.
pub struct SnapshotExpectationBuilder<S: ActorState> {
    expectations: Arc<Mutex<VecDeque<Expectation<S>>>>,
}

impl<S: ActorState> SnapshotExpectationBuilder<S> {
    /// Sets the expectation to return a snapshot.
    pub fn return_ok(self, snapshot: S::Snapshot) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Snapshot {
                response: Ok(snapshot),
            });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Snapshot {
                response: Err(error),
            });
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client wired to a receiver the test controls.
///
/// The test pulls requests off `receiver` with [`expect_action`] or
/// [`expect_snapshot`] and answers them by hand, which makes it possible to
/// assert on the exact action a client wrapper sent.
pub fn create_mock_client<S: ActorState>(
    buffer_size: usize,
    initial: S::Snapshot,
) -> (StateClient<S>, mpsc::Receiver<StateRequest<S>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (_publisher, updates) = watch::channel(initial);
    (StateClient::new(sender, updates), receiver)
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<S: ActorState>(
    receiver: &mut mpsc::Receiver<StateRequest<S>>,
) -> Option<(
    S::Action,
    oneshot::Sender<Result<S::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(StateRequest::Action { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Snapshot request
pub async fn expect_snapshot<S: ActorState>(
    receiver: &mut mpsc::Receiver<StateRequest<S>>,
) -> Option<oneshot::Sender<Result<S::Snapshot, FrameworkError>>> {
    match receiver.recv().await {
        Some(StateRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}
