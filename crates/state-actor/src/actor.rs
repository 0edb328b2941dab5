//! # Generic State Actor
//!
//! This module defines the `StateActor`, the component that owns one state
//! value and processes every request against it sequentially.

use crate::client::StateClient;
use crate::error::FrameworkError;
use crate::message::StateRequest;
use crate::state::ActorState;
use tokio::sync::{mpsc, watch};
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info, warn};

/// The generic actor that owns a single [`ActorState`].
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state, the
/// receiving end of the request channel and the sending end of the snapshot
/// channel. Because the loop is the only code that ever touches the state, no
/// `Mutex` or `RwLock` is needed.
///
/// # Usage Pattern
///
/// 1.  **Create**: `StateActor::new(state, buffer)` returns the actor and a client.
/// 2.  **Run**: spawn `actor.run(context)` on the runtime.
/// 3.  **Use**: send actions through the client, or `subscribe()` to snapshots.
///
/// ```rust
/// use state_actor::{ActorState, StateActor};
/// use async_trait::async_trait;
///
/// #[derive(Debug, Default)]
/// struct Counter { value: u32 }
/// #[derive(Debug)] enum CounterAction { Bump }
/// #[derive(Debug, thiserror::Error)] #[error("counter error")] struct CounterError;
///
/// #[async_trait]
/// impl ActorState for Counter {
///     type Action = CounterAction;
///     type ActionResult = u32;
///     type Snapshot = u32;
///     type Context = ();
///     type Error = CounterError;
///
///     fn snapshot(&self) -> u32 { self.value }
///     async fn handle_action(&mut self, _: CounterAction, _: &()) -> Result<u32, CounterError> {
///         self.value += 1;
///         Ok(self.value)
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StateActor::new(Counter::default(), 10);
///     tokio::spawn(actor.run(()));
///
///     assert_eq!(client.perform_action(CounterAction::Bump).await.unwrap(), 1);
///     assert_eq!(client.snapshot().await.unwrap(), 1);
/// }
/// ```
///
/// # Implementation Details
///
/// Each loop iteration reads [`ActorState::deadline`] and then waits on two
/// branches, inbox first:
///
/// * **Request**: an `Action` is applied through `handle_action` and, on
///   success, a fresh snapshot is published. A `Snapshot` request is answered
///   directly. A deadline that is already due is fired before the request is
///   handled, so requests never observe state that should have expired.
/// * **Deadline**: `on_deadline` is called with the current instant and a
///   snapshot is published when it reports a change.
///
/// Since the deadline is read again on every iteration, a deadline replaced by
/// an action never fires.
pub struct StateActor<S: ActorState> {
    receiver: mpsc::Receiver<StateRequest<S>>,
    state: S,
    publisher: watch::Sender<S::Snapshot>,
}

impl<S: ActorState> StateActor<S> {
    /// Creates a new `StateActor` around `state` and its associated `StateClient`.
    ///
    /// # Arguments
    ///
    /// * `state` - The initial state. Its snapshot seeds the watch channel.
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is
    ///   full, calls to the client wait until there is space.
    pub fn new(state: S, buffer_size: usize) -> (Self, StateClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (publisher, updates) = watch::channel(state.snapshot());
        let actor = Self {
            receiver,
            state,
            publisher,
        };
        (actor, StateClient::new(sender, updates))
    }

    /// Runs the event loop until every client has been dropped, then returns
    /// the final state.
    ///
    /// # Context Injection
    /// The `context` argument is handed to every `handle_action` call.
    pub async fn run(mut self, context: S::Context) -> S {
        // Short type name, e.g. "Storefront" instead of the full module path
        let state_type = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(state_type, "Actor started");

        loop {
            let deadline = self.state.deadline();
            tokio::select! {
                biased;
                msg = self.receiver.recv() => {
                    let Some(msg) = msg else { break };
                    // A deadline that passed while the request was queued
                    // still fires first
                    self.fire_due_deadline(state_type);
                    self.handle_request(msg, &context, state_type).await;
                }
                () = wait_for(deadline) => self.fire_due_deadline(state_type),
            }
        }

        info!(state_type, "Shutdown");
        self.state
    }

    async fn handle_request(
        &mut self,
        msg: StateRequest<S>,
        context: &S::Context,
        state_type: &str,
    ) {
        match msg {
            StateRequest::Action { action, respond_to } => {
                debug!(state_type, ?action, "Action");
                let result = self
                    .state
                    .handle_action(action, context)
                    .await
                    .map_err(|e| FrameworkError::StateError(Box::new(e)));
                match &result {
                    Ok(_) => {
                        self.publish();
                        info!(state_type, "Action ok");
                    }
                    Err(e) => warn!(state_type, error = %e, "Action failed"),
                }
                let _ = respond_to.send(result);
            }
            StateRequest::Snapshot { respond_to } => {
                debug!(state_type, "Snapshot");
                let _ = respond_to.send(Ok(self.state.snapshot()));
            }
        }
    }

    fn fire_due_deadline(&mut self, state_type: &str) {
        let now = Instant::now();
        let due = self.state.deadline().is_some_and(|at| at <= now);
        if due && self.state.on_deadline(now) {
            debug!(state_type, "Deadline fired");
            self.publish();
        }
    }

    fn publish(&self) {
        // send_replace stores the value even when nobody is subscribed
        self.publisher.send_replace(self.state.snapshot());
    }
}

async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(at) => sleep_until(at).await,
        None => std::future::pending().await,
    }
}
