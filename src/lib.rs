//! # Pizzeria
//!
//! A small command-line pizza-ordering simulator: pick a pizza from the
//! menu, get told how long the baking takes, and optionally how long the
//! delivery takes on top.
//!
//! ## Usage
//!
//! ```bash
//! pizzeria menu
//! pizzeria order pepperoni [--delivery]
//! ```
//!
//! ## Modules
//!
//! - `catalog` - The pizza catalog: sizes, kinds, recipes, and icons
//! - `cli` - Argument parsing and command routing
//! - `error` - Domain error types
//! - `logging` - Announcing wrapper around the timing functions
//! - `timing` - Randomized baking, delivery, and pickup durations

pub mod catalog;
pub mod cli;
pub mod error;
pub mod logging;
pub mod timing;
