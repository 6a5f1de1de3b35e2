use tracing::info;

use crate::actor_framework::Store;
use crate::domain::Cart;
use super::actions::{CartAction, CartActionResult};

impl Store for Cart {
    type Action = CartAction;
    type ActionResult = CartActionResult;

    /// Handles cart actions.
    ///
    /// # Actions
    /// - `AddItem(product)`: Adds one unit, returns the new quantity
    /// - `RemoveItem(id)`: Deletes the item outright, returns it if present
    /// - `OpenPanel` / `ClosePanel`: Toggle panel visibility
    ///
    /// Never fails; every action is defined for every cart state.
    fn handle_action(&mut self, action: CartAction) -> Result<CartActionResult, String> {
        match action {
            CartAction::AddItem(product) => {
                let quantity = self.add(&product);
                info!(
                    product_id = %product.id,
                    quantity,
                    total_items = self.total_items(),
                    "Item added to cart"
                );
                Ok(CartActionResult::AddItem(quantity))
            }
            CartAction::RemoveItem(id) => {
                let removed = self.remove(id);
                match &removed {
                    Some(item) => info!(
                        product_id = %id,
                        quantity = item.quantity,
                        total_items = self.total_items(),
                        "Item removed from cart"
                    ),
                    None => info!(product_id = %id, "Item not in cart, nothing removed"),
                }
                Ok(CartActionResult::RemoveItem(removed))
            }
            CartAction::OpenPanel => {
                self.open_panel();
                info!("Cart panel opened");
                Ok(CartActionResult::OpenPanel(()))
            }
            CartAction::ClosePanel => {
                self.close_panel();
                info!("Cart panel closed");
                Ok(CartActionResult::ClosePanel(()))
            }
        }
    }
}
