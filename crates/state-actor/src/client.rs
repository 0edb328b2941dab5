//! # Generic Client
//!
//! This module defines the generic client for communicating with a state actor.

use crate::error::FrameworkError;
use crate::message::StateRequest;
use crate::state::ActorState;
use tokio::sync::{mpsc, oneshot, watch};

/// ## StateClient
///
/// The `StateClient<S>` provides a type-safe, async API for interacting with a
/// `StateActor<S>`. Actions and snapshot reads travel over a Tokio mpsc channel
/// and are answered through oneshot channels. Published snapshots are also
/// available without a round trip through [`StateClient::subscribe`].
///
/// * **Cloneable** – holds a sender and a watch receiver, so cloning is inexpensive.
/// * **Ordered** – a `snapshot()` call observes every action sent before it.
pub struct StateClient<S: ActorState> {
    sender: mpsc::Sender<StateRequest<S>>,
    updates: watch::Receiver<S::Snapshot>,
}

impl<S: ActorState> Clone for StateClient<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            updates: self.updates.clone(),
        }
    }
}

impl<S: ActorState> StateClient<S> {
    pub fn new(
        sender: mpsc::Sender<StateRequest<S>>,
        updates: watch::Receiver<S::Snapshot>,
    ) -> Self {
        Self { sender, updates }
    }

    pub async fn perform_action(&self, action: S::Action) -> Result<S::ActionResult, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StateRequest::Action { action, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn snapshot(&self) -> Result<S::Snapshot, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StateRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// A receiver that is notified every time the actor publishes a snapshot.
    pub fn subscribe(&self) -> watch::Receiver<S::Snapshot> {
        self.updates.clone()
    }

    /// The most recently published snapshot, without contacting the actor.
    pub fn latest(&self) -> S::Snapshot {
        self.updates.borrow().clone()
    }
}
