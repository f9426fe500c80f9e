//! `SQLite` implementation of the `SessionStore` trait.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use wharf_core::{RepositoryError, SessionEntry, SessionStore};

use super::{map_sqlx_error, now_timestamp};

/// Per-user session key-value storage backed by the `session_entries`
/// table.
pub struct SqliteSessionStore {
    pool: SqlitePool,
}

impl SqliteSessionStore {
    /// Create a new `SQLite` session store.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionStore for SqliteSessionStore {
    async fn get(&self, user_id: i64, key: &str) -> Result<Option<String>, RepositoryError> {
        let row = sqlx::query("SELECT value FROM session_entries WHERE user_id = ? AND key = ?")
            .bind(user_id)
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(|r| r.get("value")))
    }

    async fn set(&self, user_id: i64, key: &str, value: &str) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO session_entries (user_id, key, value, updated_at)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(user_id, key)
            DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
            "#,
        )
        .bind(user_id)
        .bind(key)
        .bind(value)
        .bind(now_timestamp())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn delete(&self, user_id: i64, key: &str) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM session_entries WHERE user_id = ? AND key = ?")
            .bind(user_id)
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn list(&self, user_id: i64) -> Result<Vec<SessionEntry>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT user_id, key, value, updated_at FROM session_entries \
             WHERE user_id = ? ORDER BY key",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows
            .into_iter()
            .map(|r| SessionEntry {
                user_id: r.get("user_id"),
                key: r.get("key"),
                value: r.get("value"),
                updated_at: r.get("updated_at"),
            })
            .collect())
    }
}
