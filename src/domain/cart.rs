use super::product::{Price, Product, ProductId};

/// A product annotated with how many units the shopper wants.
///
/// `quantity` is always at least 1; an item is removed rather than zeroed.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    pub fn subtotal(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// Visibility of the slide-out cart panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

/// Session-scoped shopping cart.
///
/// Holds at most one [`CartItem`] per product id, in first-added order, plus
/// the panel visibility flag. The two are independent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
    panel: PanelState,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `product` and returns the item's new quantity.
    ///
    /// A repeat add only bumps the quantity of the existing item; its
    /// product fields are kept as first added.
    pub fn add(&mut self, product: &Product) -> u32 {
        if let Some(item) = self.items.iter_mut().find(|item| item.id() == product.id) {
            item.quantity += 1;
            return item.quantity;
        }

        self.items.push(CartItem {
            product: product.clone(),
            quantity: 1,
        });
        1
    }

    /// Removes the whole item for `id`. Absent ids are a no-op returning `None`.
    pub fn remove(&mut self, id: ProductId) -> Option<CartItem> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    pub fn total_price(&self) -> Price {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn panel(&self) -> PanelState {
        self.panel
    }

    pub fn is_panel_open(&self) -> bool {
        self.panel() == PanelState::Open
    }

    pub fn open_panel(&mut self) {
        self.panel = PanelState::Open;
    }

    pub fn close_panel(&mut self) {
        self.panel = PanelState::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Catalog;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn product(id: u32) -> Product {
        Catalog::seeded()
            .get(ProductId(id))
            .cloned()
            .expect("seeded product")
    }

    #[test]
    fn test_new_cart_is_empty_and_closed() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price().to_string(), "0.00");
        assert_eq!(cart.panel(), PanelState::Closed);
    }

    #[test]
    fn test_scenario_totals() {
        let mut cart = Cart::new();

        cart.add(&product(1));
        assert_eq!(cart.total_items(), 1);
        assert_eq!(cart.total_price().to_string(), "29.99");

        cart.add(&product(1));
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_price().to_string(), "59.98");

        cart.add(&product(2));
        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.total_price().to_string(), "139.97");

        cart.remove(ProductId(1));
        assert_eq!(cart.total_items(), 1);
        assert_eq!(cart.total_price().to_string(), "79.99");
    }

    #[test]
    fn test_total_price_mixed_quantities() {
        let mut cart = Cart::new();
        cart.add(&product(1));
        cart.add(&product(2));
        cart.add(&product(2));
        assert_eq!(cart.total_price().to_string(), "189.97");
    }

    #[test]
    fn test_repeat_add_keeps_existing_fields() {
        let mut cart = Cart::new();
        cart.add(&product(1));

        let mut renamed = product(1);
        renamed.name = "Renamed".to_string();
        renamed.price = Price::from_cents(1);

        assert_eq!(cart.add(&renamed), 2);
        let item = cart.get(ProductId(1)).expect("item present");
        assert_eq!(item.product.name, "Classic White T-Shirt");
        assert_eq!(item.product.price, Price::from_cents(2999));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add(&product(3));
        let before = cart.clone();

        assert!(cart.remove(ProductId(4)).is_none());
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_deletes_whole_item() {
        let mut cart = Cart::new();
        cart.add(&product(5));
        cart.add(&product(5));
        cart.add(&product(5));

        let removed = cart.remove(ProductId(5)).expect("removed item");
        assert_eq!(removed.quantity, 3);
        assert!(cart.is_empty());

        assert_eq!(cart.add(&product(5)), 1);
    }

    #[test]
    fn test_items_keep_first_added_order() {
        let mut cart = Cart::new();
        cart.add(&product(9));
        cart.add(&product(2));
        cart.add(&product(9));

        let ids: Vec<ProductId> = cart.items().iter().map(CartItem::id).collect();
        assert_eq!(ids, vec![ProductId(9), ProductId(2)]);
    }

    #[test]
    fn test_panel_is_independent_of_contents() {
        let mut cart = Cart::new();
        cart.open_panel();
        assert!(cart.is_panel_open());
        assert!(cart.is_empty());

        cart.add(&product(6));
        cart.remove(ProductId(6));
        cart.add(&product(7));
        assert!(cart.is_panel_open());

        cart.close_panel();
        assert_eq!(cart.panel(), PanelState::Closed);
        assert_eq!(cart.total_items(), 1);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(u32),
        Remove(u32),
        Open,
        Close,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (1u32..=12).prop_map(Op::Add),
            (1u32..=12).prop_map(Op::Remove),
            Just(Op::Open),
            Just(Op::Close),
        ]
    }

    fn apply(cart: &mut Cart, op: &Op) {
        match op {
            Op::Add(id) => {
                cart.add(&product(*id));
            }
            Op::Remove(id) => {
                cart.remove(ProductId(*id));
            }
            Op::Open => cart.open_panel(),
            Op::Close => cart.close_panel(),
        }
    }

    proptest! {
        #[test]
        fn product_ids_stay_unique(ops in proptest::collection::vec(op_strategy(), 0..64)) {
            let mut cart = Cart::new();
            for op in &ops {
                apply(&mut cart, op);
                let ids: HashSet<ProductId> = cart.items().iter().map(CartItem::id).collect();
                prop_assert_eq!(ids.len(), cart.items().len());
            }
        }

        #[test]
        fn totals_match_items(ops in proptest::collection::vec(op_strategy(), 0..64)) {
            let mut cart = Cart::new();
            for op in &ops {
                apply(&mut cart, op);
            }

            let quantities: u32 = cart.items().iter().map(|item| item.quantity).sum();
            let cents: u64 = cart
                .items()
                .iter()
                .map(|item| item.product.price.cents() * u64::from(item.quantity))
                .sum();

            prop_assert!(cart.items().iter().all(|item| item.quantity >= 1));
            prop_assert_eq!(cart.total_items(), quantities);
            prop_assert_eq!(cart.total_items() == 0, cart.is_empty());
            prop_assert_eq!(cart.total_price().cents(), cents);
            prop_assert_eq!(cart.total_price().to_string(), format!("{}.{:02}", cents / 100, cents % 100));
        }

        #[test]
        fn repeated_add_counts_up(id in 1u32..=12, k in 1u32..20, prefix in proptest::collection::vec(op_strategy(), 0..16)) {
            let mut cart = Cart::new();
            for op in &prefix {
                apply(&mut cart, op);
            }
            cart.remove(ProductId(id));

            for _ in 0..k {
                cart.add(&product(id));
            }
            let item = cart.get(ProductId(id)).expect("item present");
            prop_assert_eq!(item.quantity, k);
        }

        #[test]
        fn open_then_close_ends_closed(ops in proptest::collection::vec(op_strategy(), 0..32)) {
            let mut cart = Cart::new();
            cart.open_panel();
            for op in ops.iter().filter(|op| matches!(op, Op::Add(_) | Op::Remove(_))) {
                apply(&mut cart, op);
            }
            cart.close_panel();
            prop_assert_eq!(cart.panel(), PanelState::Closed);
        }
    }
}
