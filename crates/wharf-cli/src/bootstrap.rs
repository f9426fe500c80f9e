//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter: configuration resolution, the service registry,
//! and the database connection. Command handlers receive the composed
//! `CliContext` and delegate work through it.

use anyhow::Result;

use wharf_core::{AppConfig, ServiceRegistry, register_services};
use wharf_db::Database;

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// Immutable configuration resolved at startup.
    pub config: AppConfig,
    /// The capability lookup handlers resolve services from.
    pub registry: ServiceRegistry,
    db: Database,
}

impl CliContext {
    /// The open database connection.
    #[must_use]
    pub fn db(&self) -> &Database {
        &self.db
    }

    /// Close the database connection for this invocation.
    pub async fn release(self) {
        self.db.close().await;
    }
}

/// Compose the application for one CLI invocation.
///
/// Resolves configuration from the environment (with an optional URL
/// override from the command line), registers all services, opens the
/// database, and binds a scoped session. Existing rows are kept; CLI
/// invocations operate on the persistent database.
pub async fn bootstrap(database_url: Option<String>) -> Result<CliContext> {
    let mut config = AppConfig::from_env();
    if let Some(url) = database_url {
        config = config.with_database_url(url);
    }

    tracing::info!(
        target: "wharf.cli",
        database_url = %config.database_url,
        "bootstrapping CLI context"
    );

    let registry = ServiceRegistry::new();
    register_services(&registry);
    let db = Database::open(&config.database_url, &registry).await?;

    Ok(CliContext {
        config,
        registry,
        db,
    })
}
