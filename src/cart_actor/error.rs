use thiserror::Error;

use crate::domain::ProductId;

/// Errors surfaced by the cart client.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Product not in catalog: {0}")]
    UnknownProduct(ProductId),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
