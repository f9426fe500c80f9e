//! Per-test database lifecycle.
//!
//! Each test (or server run) acquires its own [`DbHandle`]: a fresh
//! schema-backed database with a scoped session bound into the service
//! registry. Release always cleans up - every table is emptied in reverse
//! dependency order with per-table error suppression, so one table's
//! failure never blocks cleanup of the rest.

use std::sync::Arc;

use anyhow::Result;
use sqlx::SqlitePool;

use wharf_core::{AppConfig, ServiceRegistry, SessionStore, UserRepository};

use crate::repositories::{SqliteSessionStore, SqliteUserRepository};
use crate::schema;
use crate::session::ScopedSession;
use crate::setup;

/// Lifecycle states of a database handle.
///
/// `Uninitialized -> SchemaCreated -> InUse -> Cleaned`; re-entering
/// `SchemaCreated` for the next test always starts from a clean slate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// No schema objects exist yet.
    Uninitialized,
    /// Schema objects created, session not yet bound.
    SchemaCreated,
    /// Session bound and registered; the test body runs here.
    InUse,
    /// Session removed and tables emptied.
    Cleaned,
}

/// A per-test database handle.
///
/// Owns the pool and the scoped session for one test's lifetime. Obtain
/// one via [`DbHandle::acquire`] and always finish with
/// [`DbHandle::release`], regardless of the test outcome.
pub struct DbHandle {
    pool: SqlitePool,
    session: Arc<ScopedSession>,
    state: LifecycleState,
}

impl DbHandle {
    /// Construct a fresh database for one test and bind it into `registry`.
    ///
    /// Connects using `config.database_url`, empties any rows a crashed
    /// prior run may have left behind, creates all schema objects, then
    /// registers the scoped session and the session-scoped stores -
    /// overwriting the previous test's bindings, so scoped state cannot
    /// leak between tests.
    pub async fn acquire(config: &AppConfig, registry: &ServiceRegistry) -> Result<Self> {
        let pool = setup::connect(&config.database_url).await?;
        tracing::debug!(target: "wharf.db", state = ?LifecycleState::Uninitialized, "acquired pool");

        // A prior run that skipped release must not leak rows into this
        // test. Errors here are expected on a brand new database (no
        // tables yet) and are suppressed per table.
        cleanup_tables(&pool).await;

        setup::create_schema(&pool).await?;
        tracing::debug!(target: "wharf.db", state = ?LifecycleState::SchemaCreated, "schema created");

        let session = bind_session(&pool, registry);
        tracing::debug!(target: "wharf.db", state = ?LifecycleState::InUse, "session bound");

        Ok(Self {
            pool,
            session,
            state: LifecycleState::InUse,
        })
    }

    /// The scoped session bound by this handle.
    #[must_use]
    pub fn session(&self) -> Arc<ScopedSession> {
        Arc::clone(&self.session)
    }

    /// The underlying pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Tear down: drop the session, empty all tables, close the pool.
    ///
    /// Infallible by construction - table failures are suppressed
    /// individually - so callers can (and should) run it after a failed
    /// test body as well as a successful one.
    pub async fn release(self) {
        let Self { pool, session, .. } = self;
        drop(session);

        cleanup_tables(&pool).await;
        pool.close().await;
        tracing::debug!(target: "wharf.db", state = ?LifecycleState::Cleaned, "released");
    }
}

/// A long-lived database connection for servers and CLI invocations.
///
/// The persistent counterpart to [`DbHandle`]: opening creates the schema
/// if missing but keeps existing rows, and closing only returns the
/// connections. Nothing is wiped.
pub struct Database {
    pool: SqlitePool,
    session: Arc<ScopedSession>,
}

impl Database {
    /// Open the database at `database_url` and bind a scoped session into
    /// `registry`.
    pub async fn open(database_url: &str, registry: &ServiceRegistry) -> Result<Self> {
        let pool = setup::setup_database(database_url).await?;
        let session = bind_session(&pool, registry);
        Ok(Self { pool, session })
    }

    /// The underlying pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// The scoped session bound by this connection.
    #[must_use]
    pub fn session(&self) -> Arc<ScopedSession> {
        Arc::clone(&self.session)
    }

    /// Close the pool. Rows are kept.
    pub async fn close(self) {
        self.pool.close().await;
    }
}

/// Bind a scoped session and the session-scoped stores over `pool`.
///
/// Registers three bindings into `registry`, overwriting any from a prior
/// session: the concrete [`ScopedSession`] plus the `dyn SessionStore` and
/// `dyn UserRepository` port implementations. Used by [`DbHandle::acquire`]
/// for the per-test lifecycle and by long-running processes that open a
/// persistent database without the clean-slate semantics.
pub fn bind_session(pool: &SqlitePool, registry: &ServiceRegistry) -> Arc<ScopedSession> {
    let session = Arc::new(ScopedSession::new(pool.clone()));
    let store: Arc<dyn SessionStore> = Arc::new(SqliteSessionStore::new(pool.clone()));
    let users: Arc<dyn UserRepository> = Arc::new(SqliteUserRepository::new(pool.clone()));

    registry.register(Arc::clone(&session));
    registry.register(store);
    registry.register(users);
    session
}

/// Delete all rows from all tables, children before parents.
///
/// Walks the schema graph's topological order in reverse so foreign-key
/// constraints are satisfied. A failing table is logged at `warn` and
/// skipped; the remaining tables are still cleaned. Never returns an
/// error.
pub async fn cleanup_tables(pool: &SqlitePool) {
    for table in schema::sorted_tables().into_iter().rev() {
        let statement = format!("DELETE FROM {}", table.name);
        if let Err(error) = sqlx::query(&statement).execute(pool).await {
            tracing::warn!(
                target: "wharf.db",
                table = table.name,
                %error,
                "cleanup failed for table, continuing"
            );
        }
    }
}
