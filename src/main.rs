mod domain;
mod clients;
mod config;
mod cli;
mod ui;

mod app_system;

#[cfg(test)]
mod mock_framework;

mod actor_framework;
mod cart_actor;

use std::io::Write;

use clap::Parser;
use tracing::{info, Instrument};

use crate::app_system::{setup_tracing, StorefrontSystem};
use crate::cli::{Args, Commands};
use crate::config::StorefrontConfig;
use crate::domain::{Catalog, ProductId};
use crate::ui::{Shell, Views};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = StorefrontConfig::from_env()?;

    let filter = if args.verbose { "debug" } else { config.log_filter.as_str() };
    setup_tracing(filter);

    let views = Views::new(&config);

    match args.command() {
        Commands::Catalog => {
            print!("{}", views.catalog(&Catalog::seeded()));
            Ok(())
        }
        Commands::Shop => {
            let system = StorefrontSystem::new(config.buffer_size, Catalog::seeded());

            let mut shell = Shell::new(system.cart_client.clone(), views);
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            let session = shell.run(stdin, &mut stdout).await;

            system.shutdown().await.map_err(anyhow::Error::msg)?;
            session
        }
        Commands::Demo => {
            let system = StorefrontSystem::new(config.buffer_size, Catalog::seeded());
            let result = run_demo(&system, &views).await;
            system.shutdown().await.map_err(anyhow::Error::msg)?;
            result
        }
    }
}

/// Scripted session: add, repeat-add, add another, remove, printing totals after each step.
async fn run_demo(system: &StorefrontSystem, views: &Views) -> anyhow::Result<()> {
    let cart = &system.cart_client;
    let mut stdout = std::io::stdout();

    enum Step {
        Add(u32),
        Remove(u32),
    }
    let steps = [Step::Add(1), Step::Add(1), Step::Add(2), Step::Remove(1)];

    cart.open_cart().await?;

    for step in steps {
        let span = tracing::info_span!("demo_step");
        async {
            match step {
                Step::Add(id) => {
                    let quantity = cart.add_to_cart(ProductId(id)).await?;
                    info!(product_id = id, quantity, "Added to cart");
                }
                Step::Remove(id) => {
                    cart.remove_from_cart(ProductId(id)).await?;
                    info!(product_id = id, "Removed from cart");
                }
            }

            let snapshot = cart.snapshot().await?;
            write!(stdout, "{}{}", views.header(&snapshot), views.cart_panel(&snapshot))?;
            writeln!(
                stdout,
                "totalItems = {}, totalPrice = {}\n",
                cart.get_total_items().await?,
                cart.get_total_price().await?
            )?;
            Ok::<(), anyhow::Error>(())
        }
        .instrument(span)
        .await?;
    }

    cart.close_cart().await?;
    info!("Demo completed");
    Ok(())
}
