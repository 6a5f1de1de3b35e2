//! Text rendering of the storefront page.
//!
//! Every function returns a `String` so the shell decides where it goes.

use console::style;

use crate::config::StorefrontConfig;
use crate::domain::{Cart, CartItem, Catalog, Price, Product};

/// Display settings shared by all views.
#[derive(Debug, Clone)]
pub struct Views {
    store_name: String,
    currency: String,
}

impl Views {
    pub fn new(config: &StorefrontConfig) -> Self {
        Self {
            store_name: config.store_name.clone(),
            currency: config.currency_symbol.clone(),
        }
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    fn money(&self, price: Price) -> String {
        format!("{}{}", self.currency, price)
    }

    /// Store name and cart icon. The count badge only shows for a non-empty cart.
    pub fn header(&self, cart: &Cart) -> String {
        let total = cart.total_items();
        let badge = if total > 0 {
            format!(" {}", style(format!("({})", total)).red().bold())
        } else {
            String::new()
        };
        format!("{}    🛒{}\n", style(&self.store_name).bold(), badge)
    }

    pub fn hero(&self) -> String {
        format!(
            "{}\n{}\n",
            style("Your Style, Your Story").bold(),
            style("Discover the latest trends in fashion").dim()
        )
    }

    /// The product grid, one card per line with the id used by `add`.
    pub fn catalog(&self, catalog: &Catalog) -> String {
        let mut output = format!("{}\n", style("Featured Products").bold().underlined());
        for product in catalog.iter() {
            output.push_str(&self.product_card(product));
        }
        output
    }

    fn product_card(&self, product: &Product) -> String {
        format!(
            "[{:>2}] {} {:<24} {:<10} {}\n",
            product.id,
            product.emoji,
            product.name,
            style(&product.category).dim(),
            style(self.money(product.price)).green()
        )
    }

    /// The slide-out cart panel.
    pub fn cart_panel(&self, cart: &Cart) -> String {
        let mut output = format!("{}\n", style("Shopping Cart").bold());

        if cart.is_empty() {
            output.push_str(&format!("  {}\n", style("Your cart is empty").dim()));
            return output;
        }

        for item in cart.items() {
            output.push_str(&self.cart_line(item));
        }
        output.push_str(&format!(
            "  Total: {}\n  {}\n",
            style(self.money(cart.total_price())).green().bold(),
            style("[checkout] Proceed to Checkout").cyan()
        ));
        output
    }

    fn cart_line(&self, item: &CartItem) -> String {
        format!(
            "  [{:>2}] {} {}  {} x {}\n",
            item.id(),
            item.product.emoji,
            item.product.name,
            self.money(item.product.price),
            item.quantity
        )
    }
}
