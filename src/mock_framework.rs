//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_dispatch`] or [`expect_snapshot`] to assert behavior.

use crate::actor_framework::{Response, Store, StoreClient, StoreRequest};
use tokio::sync::{mpsc, watch};

/// Creates a mock client and a receiver for asserting requests.
///
/// No actor runs behind the client. The test reads each request off the
/// receiver and answers through its `respond_to` sender, which makes
/// success, failure and ordering fully deterministic. The watch channel is
/// seeded with `S::default()` and never publishes.
pub fn create_mock_client<S: Store + Default>(buffer_size: usize) -> (StoreClient<S>, mpsc::Receiver<StoreRequest<S>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (_notifier, watcher) = watch::channel(S::default());
    (StoreClient::new(sender, watcher), receiver)
}

/// Helper to verify that the next message is a Dispatch request
pub async fn expect_dispatch<S: Store>(receiver: &mut mpsc::Receiver<StoreRequest<S>>) -> Option<(S::Action, Response<S::ActionResult>)> {
    match receiver.recv().await {
        Some(StoreRequest::Dispatch { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Snapshot request
pub async fn expect_snapshot<S: Store>(receiver: &mut mpsc::Receiver<StoreRequest<S>>) -> Option<Response<S>> {
    match receiver.recv().await {
        Some(StoreRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart_actor::{CartAction, CartActionResult};
    use crate::domain::{Cart, Catalog, ProductId};

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Cart>(10);

        let dispatch_task = tokio::spawn(async move {
            client.dispatch(CartAction::RemoveItem(ProductId(4))).await
        });

        let (action, responder) = expect_dispatch(&mut receiver).await.expect("Expected Dispatch request");
        assert!(matches!(action, CartAction::RemoveItem(ProductId(4))));
        responder.send(Ok(CartActionResult::RemoveItem(None))).unwrap();

        let result = dispatch_task.await.unwrap();
        assert_eq!(result, Ok(CartActionResult::RemoveItem(None)));
    }

    #[tokio::test]
    async fn test_mock_snapshot() {
        let (client, mut receiver) = create_mock_client::<Cart>(10);

        let snapshot_task = tokio::spawn(async move { client.snapshot().await });

        let responder = expect_snapshot(&mut receiver).await.expect("Expected Snapshot request");
        let mut cart = Cart::new();
        cart.add(Catalog::seeded().get(ProductId(2)).unwrap());
        responder.send(Ok(cart.clone())).unwrap();

        assert_eq!(snapshot_task.await.unwrap(), Ok(cart));
    }
}
