//! # Storefront Actor
//!
//! The single owner of all mutable page state: the category filter, the cart,
//! the transient cart notice and the open/closed flags of the page chrome.
//!
//! ## Structure
//!
//! - [`state`] - [`Storefront`], the state container and its
//!   [`ActorState`](state_actor::ActorState) implementation
//! - [`actions`] - [`StorefrontAction`] and [`StorefrontActionResult`]
//! - [`error`] - [`StorefrontError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Notice expiry
//!
//! Every successful cart change posts a notice that clears itself after the
//! configured delay. The notice's expiry is the actor's only deadline, so a
//! newer notice replaces the pending clear instead of racing it.
//!
//! ## Usage
//!
//! ```rust
//! use popcorn_culture::catalog::CatalogStore;
//! use popcorn_culture::clients::StorefrontClient;
//! use popcorn_culture::model::ProductId;
//! use popcorn_culture::notice::NOTICE_TTL;
//! use popcorn_culture::storefront_actor::{self, Storefront};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let storefront = Storefront::new(CatalogStore::seeded()?, NOTICE_TTL);
//!     let (actor, generic_client) = storefront_actor::new(storefront, 32);
//!     let client = StorefrontClient::new(generic_client);
//!     tokio::spawn(actor.run(()));
//!
//!     let count = client.add_to_cart(ProductId::from("BU-01")).await?;
//!     assert_eq!(count, 1);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod error;
pub mod state;

pub use actions::*;
pub use error::*;
pub use state::*;

use state_actor::{StateActor, StateClient};

/// Creates a new Storefront actor and its client.
pub fn new(storefront: Storefront, buffer_size: usize) -> (StateActor<Storefront>, StateClient<Storefront>) {
    StateActor::new(storefront, buffer_size)
}
