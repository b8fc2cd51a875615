//! Terminal shell - the line-oriented frontend for the dashboard.
//!
//! Reads commands from stdin, binds them to the dashboard entry points, and
//! renders the panels through [`panels::TerminalSurfaces`]. Each command runs
//! to completion before the next line is read, so there is never an
//! overlapping mutation.

/// Terminal implementations of the dashboard render surfaces
pub mod panels;

use crate::{
    core::{
        dashboard::Dashboard,
        product::Product,
        report::format_currency,
        sync::DashboardSurfaces,
    },
    errors::Result,
};
use std::io::{self, BufRead, Write};
use tracing::info;

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the command summary
    Help,
    /// Show all product cards
    Products,
    /// Redraw every panel
    Dashboard,
    /// Add units to a product's stock
    Add {
        /// Product to adjust
        product_id: u32,
        /// Units to add; defaults to 5 when omitted
        units: Option<u32>,
    },
    /// Remove units from a product's stock
    Remove {
        /// Product to adjust
        product_id: u32,
        /// Units to remove; defaults to 5 when omitted
        units: Option<u32>,
    },
    /// Show details for a single product
    Info {
        /// Product to look up
        product_id: u32,
    },
    /// Filter products by name or SKU
    Search {
        /// Substring to match; empty matches everything
        query: String,
    },
    /// Show only the products low on stock
    Alerts,
    /// List the configured sellers
    Sellers,
    /// Restore all stocks to their opening values
    Reset,
    /// Exit the dashboard
    Quit,
}

/// Parses one input line into a [`Command`].
///
/// Keywords are case-insensitive; ids and unit counts must be non-negative
/// integers. Returns `None` for anything unrecognized.
#[must_use]
pub fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let keyword = parts.next()?.to_lowercase();

    match keyword.as_str() {
        "help" => Some(Command::Help),
        "products" => Some(Command::Products),
        "dashboard" => Some(Command::Dashboard),
        "add" => {
            let product_id = parts.next()?.parse().ok()?;
            let units = match parts.next() {
                Some(raw) => Some(raw.parse().ok()?),
                None => None,
            };
            Some(Command::Add { product_id, units })
        }
        "remove" => {
            let product_id = parts.next()?.parse().ok()?;
            let units = match parts.next() {
                Some(raw) => Some(raw.parse().ok()?),
                None => None,
            };
            Some(Command::Remove { product_id, units })
        }
        "info" => {
            let product_id = parts.next()?.parse().ok()?;
            Some(Command::Info { product_id })
        }
        "search" => Some(Command::Search {
            query: parts.collect::<Vec<&str>>().join(" "),
        }),
        "alerts" => Some(Command::Alerts),
        "sellers" => Some(Command::Sellers),
        "reset" => Some(Command::Reset),
        "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

const HELP_TEXT: &str = "\
Stockdeck Help
Here is a summary of all available commands.

Action commands
  add <id> [units]     - Add units to a product's stock (default 5).
  remove <id> [units]  - Remove units from a product's stock (default 5).
  info <id>            - Show details for a single product.
  search [query]       - Filter products by name or SKU.

View commands
  products             - Show all product cards.
  dashboard            - Redraw every panel.
  alerts               - Highlight products low on stock.
  sellers              - List the configured sellers.

Utility commands
  reset                - Restore all stocks to their opening values.
  help                 - Show this help message.
  quit                 - Exit the dashboard.";

/// Runs the interactive command loop until `quit` or end of input.
///
/// # Errors
/// Returns an error only for terminal I/O failures; domain operations never
/// fail.
pub fn run<S: DashboardSurfaces>(dashboard: &mut Dashboard<S>) -> Result<()> {
    dashboard.refresh();
    println!("Type `help` for a list of commands.");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();
    loop {
        print!("stockdeck> ");
        io::stdout().flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break; // end of input
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let Some(command) = parse_command(input) else {
            println!("❌ Unrecognized command. Type `help` for a list of commands.");
            continue;
        };

        match command {
            Command::Quit => break,
            Command::Reset => {
                print!("Reset all stocks to original values? [y/N] ");
                io::stdout().flush()?;
                line.clear();
                if reader.read_line(&mut line)? == 0 {
                    break;
                }
                if line.trim().eq_ignore_ascii_case("y") {
                    dashboard.reset();
                } else {
                    println!("Reset cancelled.");
                }
            }
            other => dispatch(dashboard, &other),
        }
    }

    info!("Session ended.");
    Ok(())
}

/// Routes a parsed command to the matching dashboard entry point.
fn dispatch<S: DashboardSurfaces>(dashboard: &mut Dashboard<S>, command: &Command) {
    match command {
        Command::Help => println!("{HELP_TEXT}"),
        Command::Products => dashboard.show_products(),
        Command::Dashboard => dashboard.refresh(),
        Command::Add { product_id, units } => {
            if dashboard.increase(*product_id, *units).is_none() {
                println!("❌ Product {product_id} not found.");
            }
        }
        Command::Remove { product_id, units } => {
            if dashboard.decrease(*product_id, *units).is_none() {
                println!("❌ Product {product_id} not found.");
            }
        }
        Command::Info { product_id } => match dashboard.product_detail(*product_id) {
            Some(product) => print_product_detail(product),
            None => println!("❌ Product {product_id} not found."),
        },
        Command::Search { query } => {
            dashboard.filter(query);
        }
        Command::Alerts => dashboard.highlight_low_stock(),
        Command::Sellers => dashboard.show_sellers(),
        // Handled directly by the run loop
        Command::Reset | Command::Quit => {}
    }
}

/// Prints the detail block for a single product.
fn print_product_detail(product: &Product) {
    println!();
    println!("{}", product.name);
    println!("  SKU: {}", product.sku);
    println!("  Price: {}", format_currency(u64::from(product.price)));
    println!("  Stock: {} units  [{}]", product.stock, product.status());
    println!(
        "  Total value: {}",
        format_currency(product.inventory_value())
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_with_and_without_units() {
        assert_eq!(
            parse_command("add 3"),
            Some(Command::Add {
                product_id: 3,
                units: None
            })
        );
        assert_eq!(
            parse_command("add 3 10"),
            Some(Command::Add {
                product_id: 3,
                units: Some(10)
            })
        );
    }

    #[test]
    fn test_parse_remove() {
        assert_eq!(
            parse_command("remove 2 1"),
            Some(Command::Remove {
                product_id: 2,
                units: Some(1)
            })
        );
    }

    #[test]
    fn test_parse_rejects_bad_numbers() {
        assert_eq!(parse_command("add x"), None);
        assert_eq!(parse_command("add"), None);
        assert_eq!(parse_command("add 1 -5"), None);
        assert_eq!(parse_command("info many"), None);
    }

    #[test]
    fn test_parse_keywords_are_case_insensitive() {
        assert_eq!(parse_command("HELP"), Some(Command::Help));
        assert_eq!(
            parse_command("Info 4"),
            Some(Command::Info { product_id: 4 })
        );
    }

    #[test]
    fn test_parse_search_joins_query_words() {
        assert_eq!(
            parse_command("search blue shirt"),
            Some(Command::Search {
                query: "blue shirt".to_string()
            })
        );
        // A bare `search` shows everything
        assert_eq!(
            parse_command("search"),
            Some(Command::Search {
                query: String::new()
            })
        );
    }

    #[test]
    fn test_parse_quit_aliases() {
        assert_eq!(parse_command("quit"), Some(Command::Quit));
        assert_eq!(parse_command("exit"), Some(Command::Quit));
    }

    #[test]
    fn test_parse_unknown_input() {
        assert_eq!(parse_command("bogus"), None);
        assert_eq!(parse_command(""), None);
    }
}
