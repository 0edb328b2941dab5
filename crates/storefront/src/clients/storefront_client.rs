//! # Storefront Client
//!
//! Provides a high‑level API for interacting with the storefront actor.
//! It wraps a `StateClient<Storefront>` and exposes one method per page control.
use crate::model::{Category, ProductId};
use crate::storefront_actor::{
    CartChange, Storefront, StorefrontAction, StorefrontActionResult, StorefrontError,
};
use async_trait::async_trait;
use state_actor::{FrameworkError, StateClient, StateHandle};
use tracing::{debug, instrument};

/// Client for interacting with the storefront actor.
#[derive(Clone)]
pub struct StorefrontClient {
    inner: StateClient<Storefront>,
}

impl StorefrontClient {
    pub fn new(inner: StateClient<Storefront>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl StateHandle<Storefront> for StorefrontClient {
    type Error = StorefrontError;

    fn inner(&self) -> &StateClient<Storefront> {
        &self.inner
    }

    /// Domain errors raised inside the actor come back boxed; unwrap them so
    /// callers can match on `UnknownProduct`.
    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::StateError(inner) => match inner.downcast::<StorefrontError>() {
                Ok(domain) => *domain,
                Err(other) => StorefrontError::ActorCommunicationError(other.to_string()),
            },
            other => StorefrontError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl StorefrontClient {
    async fn send(&self, action: StorefrontAction) -> Result<StorefrontActionResult, StorefrontError> {
        self.inner
            .perform_action(action)
            .await
            .map_err(Self::map_error)
    }

    /// Add one unit of a catalog product. Returns the new cart count.
    #[instrument(skip(self))]
    pub async fn add_to_cart(&self, id: ProductId) -> Result<u32, StorefrontError> {
        debug!("Sending request");
        match self.send(StorefrontAction::AddToCart(id)).await? {
            StorefrontActionResult::AddToCart(change) => Ok(change.cart_count),
            _ => unreachable!("AddToCart action must return AddToCart result"),
        }
    }

    /// Remove one unit. Returns `None` when the product was not in the cart.
    #[instrument(skip(self))]
    pub async fn remove_from_cart(&self, id: ProductId) -> Result<Option<CartChange>, StorefrontError> {
        debug!("Sending request");
        match self.send(StorefrontAction::RemoveFromCart(id)).await? {
            StorefrontActionResult::RemoveFromCart(change) => Ok(change),
            _ => unreachable!("RemoveFromCart action must return RemoveFromCart result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn select_category(
        &self,
        category: Option<Category>,
    ) -> Result<Option<Category>, StorefrontError> {
        debug!("Sending request");
        match self.send(StorefrontAction::SelectCategory(category)).await? {
            StorefrontActionResult::SelectCategory(selected) => Ok(selected),
            _ => unreachable!("SelectCategory action must return SelectCategory result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn clear_category(&self) -> Result<(), StorefrontError> {
        debug!("Sending request");
        match self.send(StorefrontAction::ClearCategory).await? {
            StorefrontActionResult::ClearCategory(()) => Ok(()),
            _ => unreachable!("ClearCategory action must return ClearCategory result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn set_menu_open(&self, open: bool) -> Result<bool, StorefrontError> {
        match self.send(StorefrontAction::SetMenuOpen(open)).await? {
            StorefrontActionResult::SetMenuOpen(open) => Ok(open),
            _ => unreachable!("SetMenuOpen action must return SetMenuOpen result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn set_cart_open(&self, open: bool) -> Result<bool, StorefrontError> {
        match self.send(StorefrontAction::SetCartOpen(open)).await? {
            StorefrontActionResult::SetCartOpen(open) => Ok(open),
            _ => unreachable!("SetCartOpen action must return SetCartOpen result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn set_login_open(&self, open: bool) -> Result<bool, StorefrontError> {
        match self.send(StorefrontAction::SetLoginOpen(open)).await? {
            StorefrontActionResult::SetLoginOpen(open) => Ok(open),
            _ => unreachable!("SetLoginOpen action must return SetLoginOpen result"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StorefrontView;
    use state_actor::mock::{create_mock_client, expect_action, expect_snapshot, MockClient};

    #[tokio::test]
    async fn test_add_to_cart_returns_cart_count() {
        let (client, mut receiver) = create_mock_client::<Storefront>(10, StorefrontView::default());
        let storefront_client = StorefrontClient::new(client);

        let add_task = tokio::spawn(async move {
            storefront_client.add_to_cart(ProductId::from("BU-01")).await
        });

        let (action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(action, StorefrontAction::AddToCart(ProductId::from("BU-01")));

        responder
            .send(Ok(StorefrontActionResult::AddToCart(CartChange {
                quantity: 2,
                cart_count: 3,
            })))
            .unwrap();

        assert_eq!(add_task.await.unwrap().unwrap(), 3);
    }

    #[tokio::test]
    async fn test_unknown_product_survives_error_mapping() {
        let (client, mut receiver) = create_mock_client::<Storefront>(10, StorefrontView::default());
        let storefront_client = StorefrontClient::new(client);

        let add_task = tokio::spawn(async move {
            storefront_client.add_to_cart(ProductId::from("NONEXISTENT")).await
        });

        let (_action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        responder
            .send(Err(FrameworkError::StateError(Box::new(
                StorefrontError::UnknownProduct(ProductId::from("NONEXISTENT")),
            ))))
            .unwrap();

        assert_eq!(
            add_task.await.unwrap(),
            Err(StorefrontError::UnknownProduct(ProductId::from("NONEXISTENT")))
        );
    }

    #[tokio::test]
    async fn test_foreign_state_error_becomes_communication_error() {
        let (client, mut receiver) = create_mock_client::<Storefront>(10, StorefrontView::default());
        let storefront_client = StorefrontClient::new(client);

        let remove_task = tokio::spawn(async move {
            storefront_client.remove_from_cart(ProductId::from("BU-01")).await
        });

        let (action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert!(matches!(action, StorefrontAction::RemoveFromCart(_)));
        responder
            .send(Err(FrameworkError::StateError(Box::new(
                std::io::Error::other("disk on fire"),
            ))))
            .unwrap();

        match remove_task.await.unwrap() {
            Err(StorefrontError::ActorCommunicationError(msg)) => {
                assert!(msg.contains("disk on fire"))
            }
            other => panic!("Expected ActorCommunicationError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_snapshot_goes_through_state_handle() {
        let (client, mut receiver) = create_mock_client::<Storefront>(10, StorefrontView::default());
        let storefront_client = StorefrontClient::new(client);

        let snapshot_task = tokio::spawn(async move { storefront_client.snapshot().await });

        let responder = expect_snapshot(&mut receiver)
            .await
            .expect("Expected Snapshot request");
        let view = StorefrontView {
            cart_count: 7,
            ..StorefrontView::default()
        };
        responder.send(Ok(view)).unwrap();

        assert_eq!(snapshot_task.await.unwrap().unwrap().cart_count, 7);
    }

    #[tokio::test]
    async fn test_ui_flags_with_mock_expectations() {
        let mut mock = MockClient::<Storefront>::new();
        mock.expect_action()
            .return_ok(StorefrontActionResult::SetCartOpen(true));
        mock.expect_action()
            .return_ok(StorefrontActionResult::ClearCategory(()));
        mock.expect_action().return_err(FrameworkError::ActorClosed);

        let client = StorefrontClient::new(mock.client());
        assert!(client.set_cart_open(true).await.unwrap());
        client.clear_category().await.unwrap();
        assert_eq!(
            client.set_login_open(true).await,
            Err(StorefrontError::ActorCommunicationError(
                "Actor closed".to_string()
            ))
        );

        mock.verify();
    }
}
