//! CLI module
//!
//! Command-line interface for inspecting and exercising cursors.
//!
//! # Commands
//!
//! - `decode` - Decode the cursor carried by a URL
//! - `page` - Page through a JSON file of records

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
