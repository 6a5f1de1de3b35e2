//! Cart-specific store logic: the actions the cart actor accepts.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
