//! Main commands enum and primary subcommands.

use clap::Subcommand;

/// Available commands for the wharf tool.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Database maintenance
    Db {
        #[command(subcommand)]
        command: DbCommand,
    },

    /// Manage users
    User {
        #[command(subcommand)]
        command: UserCommand,
    },

    /// Per-user session values
    Session {
        #[command(subcommand)]
        command: SessionCommand,
    },

    /// Run the web server
    Serve {
        /// Port for the HTTP server
        #[arg(short, long, default_value = "9870")]
        port: u16,
    },
}

/// Database maintenance subcommands.
#[derive(Debug, Subcommand)]
pub enum DbCommand {
    /// Create the schema if it doesn't exist
    Init,
    /// Empty all tables (children before parents)
    Clean,
}

/// User subcommands.
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Create a user
    Add {
        /// Display name
        name: String,
    },
    /// Show a user by id
    Show {
        /// User id
        user_id: i64,
    },
}

/// Session subcommands.
#[derive(Debug, Subcommand)]
pub enum SessionCommand {
    /// Read a session value
    Get {
        /// Owning user id
        user_id: i64,
        /// Entry key
        key: String,
    },
    /// Store a session value
    Set {
        /// Owning user id
        user_id: i64,
        /// Entry key
        key: String,
        /// Value to store
        value: String,
    },
    /// List all session values for a user
    List {
        /// Owning user id
        user_id: i64,
    },
}
