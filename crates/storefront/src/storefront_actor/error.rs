use crate::model::ProductId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorefrontError {
    #[error("Product not in catalog: {0}")]
    UnknownProduct(ProductId),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for StorefrontError {
    fn from(msg: String) -> Self {
        StorefrontError::ActorCommunicationError(msg)
    }
}
