//! Composition utilities for wiring `SQLite` backends.
//!
//! This module provides factory functions for constructing store
//! implementations from a pool. It is focused purely on construction and
//! should not contain any domain logic.

use std::sync::Arc;

use sqlx::SqlitePool;

use wharf_core::{SessionStore, UserRepository};

use crate::repositories::{SqliteSessionStore, SqliteUserRepository};

/// Factory for creating store instances with `SQLite` backends.
///
/// Composition utilities only - no domain logic.
pub struct StoreFactory;

impl StoreFactory {
    /// Create a session store from a pool.
    #[must_use]
    pub fn session_store(pool: SqlitePool) -> Arc<SqliteSessionStore> {
        Arc::new(SqliteSessionStore::new(pool))
    }

    /// Create a user repository from a pool.
    #[must_use]
    pub fn user_repository(pool: SqlitePool) -> Arc<SqliteUserRepository> {
        Arc::new(SqliteUserRepository::new(pool))
    }
}

/// Test database helper for integration tests.
///
/// A fresh in-memory database with full schema, its scoped session and
/// stores bound into a registry of its own - the database half of a test
/// fixture. Always finish with [`TestDb::release`].
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    registry: Arc<wharf_core::ServiceRegistry>,
    handle: crate::lifecycle::DbHandle,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema and all
    /// services registered.
    pub async fn new() -> anyhow::Result<Self> {
        let registry = Arc::new(wharf_core::ServiceRegistry::new());
        wharf_core::register_services(&registry);
        let handle =
            crate::lifecycle::DbHandle::acquire(&wharf_core::AppConfig::with_defaults(), &registry)
                .await?;
        Ok(Self { registry, handle })
    }

    /// The registry holding this fixture's bindings.
    #[must_use]
    pub fn registry(&self) -> &Arc<wharf_core::ServiceRegistry> {
        &self.registry
    }

    /// Get the underlying pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        self.handle.pool()
    }

    /// The scoped session bound for this fixture.
    #[must_use]
    pub fn session(&self) -> Arc<crate::session::ScopedSession> {
        self.handle.session()
    }

    /// Resolve the session store from the fixture's registry.
    pub fn session_store(&self) -> anyhow::Result<Arc<dyn SessionStore>> {
        Ok(self.registry.get::<dyn SessionStore>()?)
    }

    /// Resolve the user repository from the fixture's registry.
    pub fn user_repository(&self) -> anyhow::Result<Arc<dyn UserRepository>> {
        Ok(self.registry.get::<dyn UserRepository>()?)
    }

    /// Tear the fixture down, emptying all tables.
    pub async fn release(self) {
        self.handle.release().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wharf_core::{NewUser, RequestContext, SessionService};

    #[tokio::test]
    async fn test_db_provides_working_stores() {
        let db = TestDb::new().await.unwrap();

        let user = db
            .user_repository()
            .unwrap()
            .create(&NewUser {
                name: "fake".to_string(),
            })
            .await
            .unwrap();

        let service: Arc<SessionService> = db.registry().get().unwrap();
        let ctx = RequestContext::new(db.session_store().unwrap()).with_user(user);

        assert_eq!(service.get(&ctx, "foo").await.unwrap(), None);
        service.set(&ctx, "foo", "bar").await.unwrap();
        assert_eq!(service.require(&ctx, "foo").await.unwrap(), "bar");

        db.release().await;
    }

    #[tokio::test]
    async fn sequential_fixtures_do_not_share_rows() {
        let first = TestDb::new().await.unwrap();
        let user = first
            .user_repository()
            .unwrap()
            .create(&NewUser {
                name: "t1".to_string(),
            })
            .await
            .unwrap();
        first
            .session_store()
            .unwrap()
            .set(user.id, "foo", "bar")
            .await
            .unwrap();
        first.release().await;

        let second = TestDb::new().await.unwrap();
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM session_entries")
            .fetch_one(second.pool())
            .await
            .unwrap();
        assert_eq!(count, 0);
        second.release().await;
    }
}
