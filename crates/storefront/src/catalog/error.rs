//! Error types for loading a catalog.

use crate::model::ProductId;
use thiserror::Error;

/// Errors that can occur while building a [`CatalogStore`](super::CatalogStore).
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two products share the same id.
    #[error("Duplicate product id: {0}")]
    DuplicateId(ProductId),

    /// The catalog document is not a valid product list.
    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
