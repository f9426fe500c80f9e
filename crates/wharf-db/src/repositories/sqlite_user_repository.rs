//! `SQLite` implementation of the `UserRepository` trait.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use wharf_core::{NewUser, RepositoryError, User, UserRepository};

use super::{map_sqlx_error, now_timestamp};

/// User records backed by the `users` table.
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new `SQLite` user repository.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let result = sqlx::query("INSERT INTO users (name, created_at) VALUES (?, ?)")
            .bind(&user.name)
            .bind(now_timestamp())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(User {
            id: result.last_insert_rowid(),
            name: user.name.clone(),
        })
    }

    async fn get_by_id(&self, id: i64) -> Result<User, RepositoryError> {
        let row = sqlx::query("SELECT id, name FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        match row {
            Some(r) => Ok(User {
                id: r.get("id"),
                name: r.get("name"),
            }),
            None => Err(RepositoryError::NotFound(format!("user id={id}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;

    #[tokio::test]
    async fn test_create_and_get() {
        let pool = setup_test_database().await.unwrap();
        let repo = SqliteUserRepository::new(pool);

        let created = repo
            .create(&NewUser {
                name: "fake".to_string(),
            })
            .await
            .unwrap();
        assert!(created.id > 0);

        let fetched = repo.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_missing_user_is_not_found() {
        let pool = setup_test_database().await.unwrap();
        let repo = SqliteUserRepository::new(pool);

        let err = repo.get_by_id(42).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }
}
