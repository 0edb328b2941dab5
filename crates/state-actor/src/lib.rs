//! # State Actor
//!
//! Building blocks for owning one piece of mutable application state inside a
//! Tokio task and talking to it through typed messages.
//!
//! ## Why a single-owner actor?
//!
//! UI-facing state (a cart, a filter, a handful of open/closed flags) is
//! mutated by many independent event sources: clicks, timers, pointer moves.
//! Putting that state behind an actor gives:
//!
//! - **One writer**: every mutation is applied sequentially, no locks.
//! - **One timer**: the state exposes a single optional deadline that the loop
//!   waits on next to its inbox, so a superseded timer can never fire late.
//! - **Observable snapshots**: after every change the actor publishes an
//!   immutable snapshot on a `watch` channel for the rendering layer.
//!
//! **Further Reading**:
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **State Layer** ([`ActorState`]) - your domain logic and snapshot type
//! 2. **Runtime Layer** ([`StateActor`]) - message loop, deadline, publishing
//! 3. **Interface Layer** ([`StateClient`], [`StateHandle`]) - type-safe access
//!
//! ## Context Injection Pattern
//!
//! Dependencies are passed to [`StateActor::run`] rather than to the
//! constructor, so clients of other actors can be created first and wired in
//! when the loop starts.
//!
//! ## Testing
//!
//! The [`mock`] module provides a `MockClient` that answers requests from a
//! queue of expectations, plus raw channel helpers for asserting on the exact
//! actions a client wrapper sends.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod message;
pub mod mock;
pub mod state;
pub mod tracing;

// Re-export core types for convenience
pub use actor::StateActor;
pub use client::StateClient;
pub use client_trait::StateHandle;
pub use error::FrameworkError;
pub use message::{Response, StateRequest};
pub use state::ActorState;
