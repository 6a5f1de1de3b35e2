use crate::domain::{CartItem, Product, ProductId};

/// Mutations the cart actor accepts.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Adds one unit of the product, creating the item on first add.
    AddItem(Product),
    /// Removes the whole item for the id. Absent ids are a no-op.
    RemoveItem(ProductId),
    /// Shows the cart panel.
    OpenPanel,
    /// Hides the cart panel.
    ClosePanel,
}

/// Results from CartActions - variants match 1:1 with CartAction
#[derive(Debug, Clone, PartialEq)]
pub enum CartActionResult {
    /// Result from AddItem - the item's quantity after the add
    AddItem(u32),
    /// Result from RemoveItem - the removed item, if there was one
    RemoveItem(Option<CartItem>),
    OpenPanel(()),
    ClosePanel(()),
}
