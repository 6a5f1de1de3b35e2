pub mod product;
pub mod catalog;
pub mod cart;

pub use product::*;
pub use catalog::*;
pub use cart::*;
