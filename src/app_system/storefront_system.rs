use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::actor_framework::StoreActor;
use crate::clients::CartClient;
use crate::domain::{Cart, Catalog};

/// The application system that owns the cart actor.
///
/// Responsible for starting the actor, handing out the client, and shutdown.
pub struct StorefrontSystem {
    pub cart_client: CartClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StorefrontSystem {
    /// Start the cart actor with an empty cart over the given catalog.
    #[instrument(name = "storefront_system", skip(catalog))]
    pub fn new(buffer_size: usize, catalog: Catalog) -> Self {
        info!(products = catalog.len(), "Starting storefront system");

        let (cart_actor, cart_store_client) = StoreActor::new(buffer_size, Cart::new());
        let cart_client = CartClient::new(cart_store_client, Arc::new(catalog));
        let cart_handle = tokio::spawn(cart_actor.run());

        info!("Storefront system started");

        Self {
            cart_client,
            handles: vec![cart_handle],
        }
    }

    /// Stop the actor and wait for it to finish.
    ///
    /// Clones of the cart client handed out earlier stay valid but will
    /// report `ActorCommunicationError` afterwards.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down storefront system");

        if let Err(e) = self.cart_client.shutdown().await {
            error!(error = %e, "Cart actor already stopped");
        }

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Actor task failed");
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Storefront system shutdown complete");
        Ok(())
    }
}
