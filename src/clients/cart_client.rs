use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

use crate::actor_framework::StoreClient;
use crate::cart_actor::{CartAction, CartActionResult, CartError};
use crate::domain::{Cart, CartItem, Catalog, ProductId};

/// What happened when the shopper asked to check out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// No checkout collaborator is wired in; the cart is left untouched.
    Unavailable,
}

/// Client for interacting with the cart actor.
///
/// This is the surface the presentation layer talks to. Product ids are
/// resolved against the catalog here, so the actor only ever sees products
/// that exist.
#[derive(Clone)]
pub struct CartClient {
    inner: StoreClient<Cart>,
    catalog: Arc<Catalog>,
}

impl CartClient {
    pub fn new(inner: StoreClient<Cart>, catalog: Arc<Catalog>) -> Self {
        Self { inner, catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Adds one unit of the product and returns the item's new quantity.
    #[instrument(skip(self))]
    pub async fn add_to_cart(&self, id: ProductId) -> Result<u32, CartError> {
        let Some(product) = self.catalog.get(id).cloned() else {
            warn!("Product not in catalog");
            return Err(CartError::UnknownProduct(id));
        };

        debug!("Sending request");
        match self.inner.dispatch(CartAction::AddItem(product)).await {
            Ok(CartActionResult::AddItem(quantity)) => Ok(quantity),
            Ok(_) => Err(CartError::ActorCommunicationError("Unexpected result".to_string())),
            Err(e) => Err(CartError::ActorCommunicationError(e)),
        }
    }

    /// Removes the whole item. Returns `None` when the product was not in the cart.
    #[instrument(skip(self))]
    pub async fn remove_from_cart(&self, id: ProductId) -> Result<Option<CartItem>, CartError> {
        debug!("Sending request");
        match self.inner.dispatch(CartAction::RemoveItem(id)).await {
            Ok(CartActionResult::RemoveItem(removed)) => Ok(removed),
            Ok(_) => Err(CartError::ActorCommunicationError("Unexpected result".to_string())),
            Err(e) => Err(CartError::ActorCommunicationError(e)),
        }
    }

    #[instrument(skip(self))]
    pub async fn snapshot(&self) -> Result<Cart, CartError> {
        debug!("Sending request");
        self.inner.snapshot().await.map_err(CartError::ActorCommunicationError)
    }

    pub async fn get_total_items(&self) -> Result<u32, CartError> {
        Ok(self.snapshot().await?.total_items())
    }

    /// Total price with exactly two decimals and no currency symbol.
    pub async fn get_total_price(&self) -> Result<String, CartError> {
        Ok(self.snapshot().await?.total_price().to_string())
    }

    /// Receiver that wakes whenever the cart changes.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.inner.subscribe()
    }

    /// Checkout has no behavior yet; this only records the request.
    #[instrument(skip(self))]
    pub async fn proceed_to_checkout(&self) -> Result<CheckoutOutcome, CartError> {
        let cart = self.snapshot().await?;
        info!(
            total_items = cart.total_items(),
            total_price = %cart.total_price(),
            "Checkout requested but not available"
        );
        Ok(CheckoutOutcome::Unavailable)
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), CartError> {
        debug!("Sending shutdown request");
        self.inner.shutdown().await.map_err(CartError::ActorCommunicationError)
    }
}

impl_unit_action_methods!(CartClient {
    open_cart => OpenPanel,
    close_cart => ClosePanel,
});
