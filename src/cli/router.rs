//! Command routing and execution
//!
//! This module handles routing CLI commands to their respective
//! implementations.

use anyhow::Result;
use rand::RngCore;
use tracing::debug;

use crate::catalog::{Pizza, PizzaKind};
use crate::cli::args::Commands;
use crate::logging::{self, Logged};
use crate::timing;

/// Execute a CLI command based on the parsed arguments
pub fn execute_command(command: Commands) -> Result<()> {
    match command {
        Commands::Order { pizza, delivery } => run_order(&pizza, delivery),
        Commands::Menu => run_menu(),
    }
}

/// Resolve the ordered pizza, bake it, and optionally deliver it.
fn run_order(name: &str, with_delivery: bool) -> Result<()> {
    let kind = PizzaKind::from_name(name)?;
    debug!(pizza = kind.name(), with_delivery, "processing order");

    let pizza = Pizza::new(kind);
    let mut rng = rand::rng();

    let cooking = Logged::with_template(
        "\u{1F373}Приготовили за {} мин!",
        "order",
        |rng: &mut dyn RngCore, pizza: &Pizza| timing::baking_time(rng, pizza),
    );
    cooking.call(&mut rng, &pizza);

    if with_delivery {
        logging::delivery().call(&mut rng, &pizza);
    }

    Ok(())
}

/// Print every pizza on the menu, one per line.
fn run_menu() -> Result<()> {
    for kind in PizzaKind::MENU {
        let pizza = Pizza::new(kind);
        println!(
            "- {} {}: {}",
            kind.name(),
            kind.icon(),
            pizza.recipe().join(", ")
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_with_unknown_pizza_fails() {
        let result = execute_command(Commands::Order {
            pizza: "doner".to_string(),
            delivery: false,
        });
        let err = result.unwrap_err();
        assert!(err.to_string().contains("doner"));
    }

    #[test]
    fn test_order_resolves_menu_names_in_any_case() {
        for name in ["pepperoni", "PEPPERONI", "Margherita", "hawaiian"] {
            let result = execute_command(Commands::Order {
                pizza: name.to_string(),
                delivery: false,
            });
            assert!(result.is_ok(), "order '{name}' should resolve");
        }
    }

    #[test]
    fn test_menu_succeeds() {
        assert!(execute_command(Commands::Menu).is_ok());
    }
}
