//! # Clients
//!
//! Type-safe wrappers around [`StateClient`](state_actor::StateClient) that
//! hide request/response plumbing behind domain methods and map framework
//! failures onto domain errors.

pub mod storefront_client;

pub use storefront_client::*;
