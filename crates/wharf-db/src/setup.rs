//! Database setup and initialization.
//!
//! This module provides pool construction and idempotent schema creation.
//! Entry points call [`setup_database`] with the resolved connection URL;
//! the per-test lifecycle in [`lifecycle`](crate::lifecycle) reuses
//! [`connect`] and [`create_schema`] separately so it can clean up before
//! creating the schema.

use std::str::FromStr;

use anyhow::Result;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Sets up the `SQLite` database connection and ensures the schema exists.
///
/// # Errors
///
/// Returns an error if the URL cannot be parsed, the database cannot be
/// opened or created, or schema creation fails.
pub async fn setup_database(db_url: &str) -> Result<SqlitePool> {
    let pool = connect(db_url).await?;
    create_schema(&pool).await?;
    Ok(pool)
}

/// Sets up an in-memory `SQLite` database for testing.
///
/// Creates a fresh in-memory database with the full production schema.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_database() -> Result<SqlitePool> {
    setup_database("sqlite::memory:").await
}

/// Open a connection pool for the given URL, creating the database file if
/// missing.
///
/// Foreign keys are enforced explicitly: the cleanup ordering in
/// [`lifecycle`](crate::lifecycle) is load-bearing and must not be masked
/// by a disabled pragma.
pub async fn connect(db_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(db_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let mut pool_options = SqlitePoolOptions::new();
    if is_memory_url(db_url) {
        // An in-memory database exists per connection; cap the pool at one
        // so every query observes the same schema and rows.
        pool_options = pool_options.max_connections(1);
    }

    let pool = pool_options.connect_with(options).await?;
    Ok(pool)
}

fn is_memory_url(db_url: &str) -> bool {
    db_url.contains(":memory:") || db_url.contains("mode=memory")
}

/// Creates the complete database schema.
///
/// Creates all tables and indexes declared in [`schema`](crate::schema).
/// It is safe to call multiple times as all operations use IF NOT EXISTS.
pub async fn create_schema(pool: &SqlitePool) -> Result<()> {
    // Create the users table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Create the session entries table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS session_entries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            key TEXT NOT NULL,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE RESTRICT,
            UNIQUE(user_id, key)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Index on user_id for faster per-user lookups
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_session_entries_user ON session_entries(user_id)",
    )
    .execute(pool)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_setup_test_database() {
        let pool = setup_test_database().await.unwrap();

        // Verify tables exist by querying them
        let _: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .unwrap();

        let _: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM session_entries")
            .fetch_one(&pool)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_schema_creation_is_idempotent() {
        let pool = setup_test_database().await.unwrap();
        create_schema(&pool).await.unwrap();
        create_schema(&pool).await.unwrap();
    }

    #[tokio::test]
    async fn test_foreign_keys_are_enforced() {
        let pool = setup_test_database().await.unwrap();

        let result = sqlx::query(
            "INSERT INTO session_entries (user_id, key, value, updated_at) \
             VALUES (999, 'k', 'v', '2024-01-01 00:00:00')",
        )
        .execute(&pool)
        .await;

        assert!(result.is_err(), "expected a foreign key violation");
    }

    #[tokio::test]
    async fn test_setup_database_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wharf.db");
        let url = format!("sqlite://{}", path.display());

        let pool = setup_database(&url).await.unwrap();
        let _: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .unwrap();
        pool.close().await;

        assert!(path.exists());
    }
}
