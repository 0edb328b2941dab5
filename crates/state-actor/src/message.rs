//! # Generic Messages
//!
//! Messages exchanged between a [`StateClient`](crate::StateClient) and its
//! [`StateActor`](crate::StateActor).

use crate::error::FrameworkError;
use crate::state::ActorState;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to the actor.
///
/// Unlike a resource store there is exactly one state per actor, so requests
/// carry no id. Mutations go through [`StateRequest::Action`]; reads go
/// through [`StateRequest::Snapshot`], which is answered in order with the
/// actions queued before it.
#[derive(Debug)]
pub enum StateRequest<S: ActorState> {
    Action {
        action: S::Action,
        respond_to: Response<S::ActionResult>,
    },
    Snapshot {
        respond_to: Response<S::Snapshot>,
    },
}
