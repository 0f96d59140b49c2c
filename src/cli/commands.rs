//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Stable cursor pagination CLI
#[derive(Parser, Debug)]
#[command(name = "stable-cursor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Pagination defaults file (YAML or JSON)
    #[arg(short, long, global = true)]
    pub defaults: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode the cursor carried by a request URL
    Decode {
        /// Request URL
        #[arg(long)]
        url: String,

        /// Fail instead of falling back when a parameter is malformed
        #[arg(long)]
        strict: bool,
    },

    /// Fetch one page from a JSON array of records
    Page {
        /// JSON file holding an array of records
        #[arg(short, long)]
        items: PathBuf,

        /// Request URL carrying the cursor
        #[arg(long)]
        url: String,

        /// Fetch exactly one page, without a lookahead record
        #[arg(long)]
        no_prefetch: bool,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    Pretty,
}
