//! # StateHandle Trait
//!
//! Common interface for domain-specific clients, adding default `snapshot` and
//! `subscribe` methods on top of a generic `StateClient`.
use crate::{ActorState, FrameworkError, StateClient};
use async_trait::async_trait;
use tokio::sync::watch;

/// Trait for domain clients to inherit the standard read operations.
///
/// # Example
///
/// ```rust
/// use state_actor::{ActorState, FrameworkError, StateClient, StateHandle};
/// use async_trait::async_trait;
///
/// #[derive(Debug)] struct Lamp { on: bool }
/// #[derive(Debug)] enum LampAction { Toggle }
/// #[derive(Debug)] struct LampError(String);
///
/// impl std::fmt::Display for LampError {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "{}", self.0)
///     }
/// }
/// impl std::error::Error for LampError {}
/// impl From<String> for LampError {
///     fn from(s: String) -> Self { LampError(s) }
/// }
///
/// #[async_trait]
/// impl ActorState for Lamp {
///     type Action = LampAction;
///     type ActionResult = bool;
///     type Snapshot = bool;
///     type Context = ();
///     type Error = LampError;
///
///     fn snapshot(&self) -> bool { self.on }
///     async fn handle_action(&mut self, _: LampAction, _: &()) -> Result<bool, LampError> {
///         self.on = !self.on;
///         Ok(self.on)
///     }
/// }
///
/// struct LampClient { inner: StateClient<Lamp> }
///
/// #[async_trait]
/// impl StateHandle<Lamp> for LampClient {
///     type Error = LampError;
///
///     fn inner(&self) -> &StateClient<Lamp> { &self.inner }
///
///     fn map_error(e: FrameworkError) -> Self::Error { LampError(e.to_string()) }
/// }
///
/// async fn usage(client: LampClient) {
///     // snapshot() and subscribe() are provided automatically
///     let _ = client.snapshot().await;
///     let _rx = client.subscribe();
/// }
/// ```
#[async_trait]
pub trait StateHandle<S: ActorState>: Send + Sync {
    /// The domain-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic StateClient.
    fn inner(&self) -> &StateClient<S>;

    /// Map framework errors to the domain error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch the current snapshot, ordered after every action already sent.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<S::Snapshot, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }

    /// Subscribe to published snapshots.
    fn subscribe(&self) -> watch::Receiver<S::Snapshot> {
        self.inner().subscribe()
    }
}
