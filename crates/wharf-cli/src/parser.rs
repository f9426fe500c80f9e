//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface definition for wharf.
///
/// This is the top-level parser that handles global options and
/// dispatches to subcommands.
#[derive(Parser)]
#[command(name = "wharf")]
#[command(about = "Manage wharf users, sessions and the web server")]
pub struct Cli {
    /// Override the database URL for this invocation
    #[arg(long = "database-url", global = true, env = "WHARF_DATABASE_URL")]
    pub database_url: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}
