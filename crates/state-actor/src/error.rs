//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself, as opposed to errors produced
//! by the state a [`StateActor`](crate::StateActor) owns.

/// Errors that can occur within the state actor framework.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("State error: {0}")]
    StateError(Box<dyn std::error::Error + Send + Sync>),
}
