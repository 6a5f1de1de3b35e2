pub mod views;
pub mod shell;

pub use views::Views;
pub use shell::Shell;
