use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(about = "Single-page fashion storefront with an in-memory cart")]
#[command(version)]
pub struct Args {
    /// Enable debug logging (ignored when RUST_LOG is set)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Commands {
    /// Browse the catalog and manage the cart interactively
    #[default]
    Shop,
    /// Run a scripted add/remove session and print the totals
    Demo,
    /// Print the product grid and exit
    Catalog,
}

impl Args {
    pub fn command(&self) -> Commands {
        self.command.unwrap_or_default()
    }
}
