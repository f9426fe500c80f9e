//! CLI library for wharf.
//!
//! The binary in `main.rs` wires these pieces together: `parser` defines
//! the argument surface, `bootstrap` composes the application, and
//! `handlers` hold the command implementations.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by main.rs binary
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;
use wharf_axum as _;

pub mod bootstrap;
pub mod commands;
pub mod handlers;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::{CliContext, bootstrap};
pub use commands::{Commands, DbCommand, SessionCommand, UserCommand};
pub use parser::Cli;
