//! # ActorState Trait
//!
//! The contract a state container must satisfy to be owned by a
//! [`StateActor`](crate::StateActor).
//!
//! A state is a single value (a cart, a form, a whole page model) that is
//! mutated only through a typed `Action` enum and observed only through an
//! immutable `Snapshot`. The actor guarantees that actions are applied one at a
//! time, so implementations never need interior locking.
//!
//! # Timer hook
//!
//! A state may expose one pending deadline via [`ActorState::deadline`]. The
//! actor sleeps until that instant alongside its inbox and calls
//! [`ActorState::on_deadline`] when it passes. The deadline is re-read after
//! every message, so replacing it inside `handle_action` cancels the previous
//! one. There is never more than one timer per actor.

use async_trait::async_trait;
use std::fmt::Debug;
use tokio::time::Instant;

/// Trait that any state container must implement to be managed by a `StateActor`.
///
/// # Async & Context
/// `handle_action` is async and receives the `Context` passed to
/// [`StateActor::run`](crate::StateActor::run), so dependencies can be wired
/// after construction. Use `()` when the state has none.
#[async_trait]
pub trait ActorState: Send + 'static {
    /// Enum of the mutations this state accepts.
    type Action: Send + Debug;

    /// The value returned to the caller of an action.
    type ActionResult: Send + Debug;

    /// Read-only view handed to observers. Published after every successful
    /// action and every fired deadline.
    type Snapshot: Clone + Send + Sync + Debug + 'static;

    /// The runtime context (dependencies) injected into the actor.
    type Context: Send + Sync;

    /// The error type for this state.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the current snapshot.
    fn snapshot(&self) -> Self::Snapshot;

    /// Apply one action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    /// The single pending deadline, if any.
    fn deadline(&self) -> Option<Instant> {
        None
    }

    /// Called once the current deadline has passed. Returns `true` when the
    /// state changed and a new snapshot should be published.
    fn on_deadline(&mut self, _now: Instant) -> bool {
        false
    }
}
