//! Test fixture for the web adapter.
//!
//! `TestApp` bundles what one test needs: the application context, an
//! acquired database lifecycle, and a router to drive with
//! `tower::ServiceExt::oneshot`. Each test gets its own fixture; always
//! finish with [`TestApp::release`] so the database is cleaned for the
//! next one.

use std::sync::Arc;

use anyhow::Result;
use axum::Router;

use wharf_core::{AppConfig, NewUser, User, UserRepository};
use wharf_db::DbHandle;

use crate::bootstrap::bootstrap;
use crate::state::AppState;

/// One test's application instance: context + database handle.
pub struct TestApp {
    ctx: AppState,
    db: DbHandle,
}

impl TestApp {
    /// Build an application over a fresh in-memory database.
    pub async fn spawn() -> Result<Self> {
        Self::with_config(AppConfig::with_defaults()).await
    }

    /// Build an application over the given configuration.
    pub async fn with_config(config: AppConfig) -> Result<Self> {
        let ctx = Arc::new(bootstrap(config));
        let db = DbHandle::acquire(&ctx.config, &ctx.registry).await?;
        Ok(Self { ctx, db })
    }

    /// The shared application context.
    #[must_use]
    pub fn context(&self) -> &AppState {
        &self.ctx
    }

    /// The acquired database handle.
    #[must_use]
    pub fn db(&self) -> &DbHandle {
        &self.db
    }

    /// A router bound to this application's state - the HTTP test client.
    #[must_use]
    pub fn router(&self) -> Router {
        crate::routes::create_router(Arc::clone(&self.ctx))
    }

    /// Seed a user row and return it.
    pub async fn create_user(&self, name: &str) -> Result<User> {
        let users = self.ctx.registry.get::<dyn UserRepository>()?;
        Ok(users
            .create(&NewUser {
                name: name.to_string(),
            })
            .await?)
    }

    /// Tear down: release the database lifecycle.
    pub async fn release(self) {
        self.db.release().await;
    }
}
