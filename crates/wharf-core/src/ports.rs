//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Traits are minimal and CRUD-focused

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{NewUser, SessionEntry, User};

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g.,
/// sqlx errors) and provides a clean interface for services to handle
/// storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An entity with the same identifier already exists.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A constraint was violated (e.g., foreign key, unique constraint).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Store for per-user session values.
///
/// The implementation owns the current unit of work; one store instance is
/// bound per test or request and re-registered on every database
/// lifecycle `acquire`.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Fetch the value stored under `key` for `user_id`, if any.
    async fn get(&self, user_id: i64, key: &str) -> Result<Option<String>, RepositoryError>;

    /// Store `value` under `key` for `user_id`, replacing any prior value.
    async fn set(&self, user_id: i64, key: &str, value: &str) -> Result<(), RepositoryError>;

    /// Remove the value stored under `key` for `user_id`.
    ///
    /// Removing an absent key is not an error.
    async fn delete(&self, user_id: i64, key: &str) -> Result<(), RepositoryError>;

    /// List all entries for `user_id`.
    async fn list(&self, user_id: i64) -> Result<Vec<SessionEntry>, RepositoryError>;
}

/// Repository for user records.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user and return it with its assigned id.
    async fn create(&self, user: &NewUser) -> Result<User, RepositoryError>;

    /// Fetch a user by id.
    async fn get_by_id(&self, id: i64) -> Result<User, RepositoryError>;
}
