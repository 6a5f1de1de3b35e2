//! Line-oriented shell that drives the cart client.
//!
//! Reads one command per line, applies it through [`CartClient`], and
//! re-renders the header badge (and the panel, when open) whenever the
//! cart's watch channel reports a change.

use std::io::Write;

use console::style;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::watch;
use tracing::{debug, instrument};

use crate::cart_actor::CartError;
use crate::clients::{CartClient, CheckoutOutcome};
use crate::domain::{Cart, ProductId};
use super::views::Views;

const HELP: &str = "\
Commands:
  catalog | ls        show the product grid
  add <id>            add one unit of a product
  remove <id> | rm    remove a product from the cart
  open | cart         show the cart panel
  close               hide the cart panel
  total               print item count and total price
  checkout            proceed to checkout
  help | ?            show this message
  quit | exit         leave the shop
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    Catalog,
    Add(ProductId),
    Remove(ProductId),
    Open,
    Close,
    Total,
    Checkout,
    Help,
    Quit,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ShellError {
    #[error("unknown command `{0}` (try `help`)")]
    UnknownCommand(String),
    #[error("`{0}` needs a product id")]
    MissingProductId(String),
    #[error("not a product id: {0}")]
    InvalidProductId(String),
    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),
    #[error("input is not valid UTF-8")]
    InvalidUtf8,
}

impl ShellCommand {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, ShellError> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let verb = verb.to_ascii_lowercase();

        let command = match verb.as_str() {
            "catalog" | "ls" => ShellCommand::Catalog,
            "add" => ShellCommand::Add(parse_id(&verb, words.next())?),
            "remove" | "rm" => ShellCommand::Remove(parse_id(&verb, words.next())?),
            "open" | "cart" => ShellCommand::Open,
            "close" => ShellCommand::Close,
            "total" => ShellCommand::Total,
            "checkout" => ShellCommand::Checkout,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            _ => return Err(ShellError::UnknownCommand(verb)),
        };

        if let Some(extra) = words.next() {
            return Err(ShellError::UnexpectedArgument(extra.to_string()));
        }
        Ok(Some(command))
    }
}

fn parse_id(verb: &str, word: Option<&str>) -> Result<ProductId, ShellError> {
    let word = word.ok_or_else(|| ShellError::MissingProductId(verb.to_string()))?;
    word.parse::<u32>()
        .map(ProductId)
        .map_err(|_| ShellError::InvalidProductId(word.to_string()))
}

pub struct Shell {
    client: CartClient,
    views: Views,
    watcher: watch::Receiver<Cart>,
}

impl Shell {
    pub fn new(client: CartClient, views: Views) -> Self {
        let watcher = client.subscribe();
        Self { client, views, watcher }
    }

    /// Run until `quit` or end of input.
    #[instrument(name = "shell", skip_all)]
    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        {
            let cart = self.watcher.borrow_and_update();
            write!(out, "{}\n{}\n", self.views.header(&cart), self.views.hero())?;
        }
        writeln!(out, "{}", self.views.catalog(self.client.catalog()))?;
        writeln!(out, "{}", style("Type `help` for commands.").dim())?;

        let mut input = input;
        let mut buf = Vec::new();
        loop {
            write!(out, "> ")?;
            out.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf).await? == 0 {
                writeln!(out)?;
                break;
            }

            let parsed = match std::str::from_utf8(&buf) {
                Ok(line) => ShellCommand::parse(line),
                Err(_) => Err(ShellError::InvalidUtf8),
            };
            let command = match parsed {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    writeln!(out, "{}", style(e).red())?;
                    continue;
                }
            };
            debug!(?command, "Executing shell command");

            if command == ShellCommand::Quit {
                break;
            }
            self.execute(command, out).await?;
            self.render_changes(out)?;
        }

        writeln!(out, "Thanks for shopping!")?;
        Ok(())
    }

    async fn execute<W: Write>(&self, command: ShellCommand, out: &mut W) -> anyhow::Result<()> {
        match command {
            ShellCommand::Catalog => {
                write!(out, "{}", self.views.catalog(self.client.catalog()))?;
            }
            ShellCommand::Add(id) => match self.client.add_to_cart(id).await {
                Ok(quantity) => {
                    // The watch value already holds the post-add cart
                    let name = self
                        .watcher
                        .borrow()
                        .get(id)
                        .map(|item| item.product.name.clone())
                        .unwrap_or_else(|| id.to_string());
                    writeln!(out, "Added {} (x{})", name, quantity)?;
                }
                Err(CartError::UnknownProduct(id)) => {
                    writeln!(out, "{}", style(format!("No product with id {}", id)).red())?;
                }
                Err(e) => return Err(e.into()),
            },
            ShellCommand::Remove(id) => match self.client.remove_from_cart(id).await? {
                Some(item) => writeln!(out, "Removed {}", item.product.name)?,
                None => writeln!(out, "Product {} is not in your cart", id)?,
            },
            ShellCommand::Open => {
                self.client.open_cart().await?;
                // Already open: nothing was published, so draw it here
                if !self.watcher.has_changed().unwrap_or(false) {
                    write!(out, "{}", self.views.cart_panel(&self.watcher.borrow()))?;
                }
            }
            ShellCommand::Close => {
                self.client.close_cart().await?;
                writeln!(out, "Cart closed")?;
            }
            ShellCommand::Total => {
                let items = self.client.get_total_items().await?;
                let price = self.client.get_total_price().await?;
                writeln!(out, "Items: {}  Total: {}{}", items, self.views.currency(), price)?;
            }
            ShellCommand::Checkout => match self.client.proceed_to_checkout().await? {
                CheckoutOutcome::Unavailable => {
                    writeln!(out, "{}", style("Checkout is not available yet.").yellow())?;
                }
            },
            ShellCommand::Help => write!(out, "{}", HELP)?,
            ShellCommand::Quit => {}
        }
        Ok(())
    }

    fn render_changes<W: Write>(&mut self, out: &mut W) -> anyhow::Result<()> {
        if !self.watcher.has_changed().unwrap_or(false) {
            return Ok(());
        }

        let cart = self.watcher.borrow_and_update();
        write!(out, "{}", self.views.header(&cart))?;
        if cart.is_panel_open() {
            write!(out, "{}", self.views.cart_panel(&cart))?;
        }
        Ok(())
    }
}
