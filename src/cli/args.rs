//! CLI argument structures
//!
//! This module defines the command-line interface of the `pizzeria`
//! binary: the main [`Cli`] structure and the subcommand definitions.

use clap::{Parser, Subcommand};

/// Order a pizza from the command line
#[derive(Parser)]
#[command(name = "pizzeria")]
#[command(about = "pizzeria - Order a pizza and find out how long it takes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Order a pizza and report how long it takes
    #[command(name = "order")]
    Order {
        /// Name of the pizza to order (case-insensitive)
        pizza: String,

        /// Deliver the order instead of leaving it for pickup
        #[arg(long)]
        delivery: bool,
    },

    /// List every pizza on offer
    #[command(name = "menu")]
    Menu,
}
