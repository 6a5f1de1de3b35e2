//! System orchestration, startup, shutdown and tracing setup.

pub mod storefront_system;
pub mod tracing;

pub use storefront_system::*;
pub use self::tracing::*;
