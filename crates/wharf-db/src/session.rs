//! The scoped session - a per-test/per-request unit of work.
//!
//! One `ScopedSession` is bound per database lifecycle `acquire` and
//! registered into the service registry so any component can resolve "the
//! current session" without explicit plumbing through every call site.

use sqlx::SqlitePool;

/// A unit of work bound to the current logical context (request or test).
///
/// Wraps the connection pool for the lifetime of one lifecycle; shared
/// within a test but never across tests.
#[derive(Clone)]
pub struct ScopedSession {
    pool: SqlitePool,
}

impl ScopedSession {
    /// Bind a session over the given pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// The underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl std::fmt::Debug for ScopedSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopedSession")
            .field("closed", &self.pool.is_closed())
            .finish()
    }
}
