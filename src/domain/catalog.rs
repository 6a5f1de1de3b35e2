use super::product::{Product, ProductId};

/// The fixed set of purchasable products.
///
/// Built once at startup and never mutated; clients share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// The twelve products the storefront ships with.
    pub fn seeded() -> Self {
        let products = vec![
            Product::new(1, "Classic White T-Shirt", 2999, "Tops", "👕"),
            Product::new(2, "Slim Fit Jeans", 7999, "Bottoms", "👖"),
            Product::new(3, "Leather Jacket", 19999, "Outerwear", "🧥"),
            Product::new(4, "Summer Dress", 8999, "Dresses", "👗"),
            Product::new(5, "Casual Hoodie", 5999, "Tops", "🧥"),
            Product::new(6, "Running Shoes", 11999, "Footwear", "👟"),
            Product::new(7, "Wool Sweater", 6999, "Tops", "🧶"),
            Product::new(8, "Denim Shorts", 4999, "Bottoms", "🩳"),
            Product::new(9, "Winter Coat", 24999, "Outerwear", "🧥"),
            Product::new(10, "Striped Shirt", 4499, "Tops", "👔"),
            Product::new(11, "Maxi Dress", 9499, "Dresses", "👗"),
            Product::new(12, "Sneakers", 8999, "Footwear", "👟"),
        ];
        Self { products }
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }
}
