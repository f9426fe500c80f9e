//! Application factory - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the web adapter. One application context is built per session; its
//! registry holds the application-scoped services, and the database
//! lifecycle re-binds the session-scoped stores on every acquire.

use std::sync::Arc;

use anyhow::Result;

use wharf_core::{AppConfig, ServiceRegistry, register_services};

/// Application context for the web adapter.
///
/// Owns the resolved configuration and the service registry. One instance
/// per test session or server run; construct it via [`bootstrap`].
pub struct AppContext {
    /// Immutable configuration resolved at startup.
    pub config: AppConfig,
    /// The capability lookup all handlers resolve services from.
    pub registry: ServiceRegistry,
}

/// Build an application context with all services registered.
///
/// Service discovery is an explicit, deterministic list
/// ([`register_services`]); building the application twice yields two
/// independent registries, each with exactly one binding per service.
#[must_use]
pub fn bootstrap(config: AppConfig) -> AppContext {
    tracing::info!(
        target: "wharf.bootstrap",
        database_url = %config.database_url,
        debug = config.debug,
        "building application context"
    );

    let registry = ServiceRegistry::new();
    register_services(&registry);

    AppContext { config, registry }
}

/// Start the web server on the specified port.
///
/// Opens the configured database (creating the schema if needed), binds a
/// scoped session for the server's lifetime, and closes the pool when the
/// server loop exits. Unlike the per-test lifecycle, existing rows are
/// kept.
pub async fn start_server(config: AppConfig, port: u16) -> Result<()> {
    use tokio::net::TcpListener;

    let ctx = Arc::new(bootstrap(config));
    let db = wharf_db::Database::open(&ctx.config.database_url, &ctx.registry).await?;

    let app = crate::routes::create_router(Arc::clone(&ctx));
    let addr = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("wharf server listening on http://{addr}");

    let served = axum::serve(listener, app).await;
    db.close().await;
    served?;
    Ok(())
}
