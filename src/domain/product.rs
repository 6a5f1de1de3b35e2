use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Identity key of a catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// A non-negative amount of money, stored in cents.
///
/// Displays with exactly two decimals and no currency symbol, e.g. `189.97`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub fn cents(&self) -> u64 {
        self.0
    }

    /// Price of `quantity` units.
    pub fn times(self, quantity: u32) -> Price {
        Price(self.0 * u64::from(quantity))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.cents() / 100, self.cents() % 100)
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

/// Represents a product in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub category: String,
    pub emoji: String,
}

impl Product {
    /// Creates a new Product.
    ///
    /// # Arguments
    /// * `id` - Catalog-unique identifier
    /// * `name` - Display name
    /// * `price_cents` - Unit price in cents
    /// * `category` - Informational category label
    /// * `emoji` - Glyph shown in place of an image
    pub fn new(
        id: u32,
        name: impl Into<String>,
        price_cents: u64,
        category: impl Into<String>,
        emoji: impl Into<String>,
    ) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            price: Price::from_cents(price_cents),
            category: category.into(),
            emoji: emoji.into(),
        }
    }
}
