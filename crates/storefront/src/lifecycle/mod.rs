//! # System Lifecycle
//!
//! Starting and stopping the storefront.
//!
//! [`StorefrontSystem`] loads the catalog, spawns the storefront actor with
//! the configured notice delay and inbox capacity, and hands out the client.
//! There is a single actor with no dependencies, so its context is `()`.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the inbox
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - the task returns the final state, which is logged
//!
//! A pending notice deadline does not keep the actor alive: the loop exits as
//! soon as the inbox closes.
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the `RUST_LOG` driven subscriber once per
//! process:
//!
//! ```bash
//! RUST_LOG=info cargo run      # start/shutdown and cart notices
//! RUST_LOG=debug cargo run     # full action payloads and notice expiry
//! ```

pub mod storefront_system;

pub use state_actor::tracing::setup_tracing;
pub use storefront_system::*;
